//! 에러 타입 정의
//!
//! 이 모듈은 라이브러리에서 사용되는 모든 에러 타입을 정의합니다.

use std::error::Error;
use std::fmt::{self, Debug};

/// 라이브러리 전용 Result 타입
///
/// 에러 타입으로 기본적으로 [`MecabKoError`]를 사용합니다.
pub type Result<T, E = MecabKoError> = std::result::Result<T, E>;

/// 라이브러리의 에러 타입
///
/// 토큰 생성 과정에서 발생할 수 있는 모든 에러를 표현합니다.
/// 각 배리언트는 특정 에러 조건에 대응합니다.
#[derive(Debug, thiserror::Error)]
pub enum MecabKoError {
    /// 잘못된 인자 에러
    ///
    /// [`InvalidArgumentError`]의 에러 배리언트.
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 잘못된 포맷 에러
    ///
    /// [`InvalidFormatError`]의 에러 배리언트.
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 호환되지 않는 사전 에러
    ///
    /// `Compound`/`Inflect`/`Preanalysis` 형태소의 자질 문자열이 요구되는
    /// 필드 수보다 짧은 경우 발생합니다. 안전한 기본 분해가 존재하지 않으므로
    /// 현재 토큰 생성을 중단해야 하는 치명적인 설정 오류입니다.
    #[error(
        "Incompatible dictionary: the feature string has only {num_fields} fields; \
         please use a higher version of mecab-ko-dic"
    )]
    IncompatibleDictionary {
        /// 자질 문자열에서 실제로 발견된 필드 수
        num_fields: usize,
    },

    /// 정수 파싱 에러
    ///
    /// [`ParseIntError`](std::num::ParseIntError)의 에러 배리언트.
    #[error(transparent)]
    ParseInt(#[from] std::num::ParseIntError),
}

impl MecabKoError {
    /// 잘못된 인자 에러를 생성합니다
    ///
    /// # 인자
    ///
    /// * `arg` - 인자의 이름
    /// * `msg` - 에러 메시지
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// 잘못된 포맷 에러를 생성합니다
    ///
    /// # 인자
    ///
    /// * `arg` - 포맷의 이름
    /// * `msg` - 에러 메시지
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }
}

/// 인자가 잘못된 경우 사용되는 에러
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 인자의 이름
    pub(crate) arg: &'static str,

    /// 에러 메시지
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// 입력 포맷이 잘못된 경우 사용되는 에러
#[derive(Debug)]
pub struct InvalidFormatError {
    /// 포맷의 이름
    pub(crate) arg: &'static str,

    /// 에러 메시지
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}
