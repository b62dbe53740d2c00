//! # mecab-ko-tokenizer
//!
//! 한국어 형태소 분석 결과를 검색 색인용 토큰 스트림으로 변환하는 라이브러리입니다.
//!
//! ## 개요
//!
//! 외부 형태소 분석기(mecab-ko + mecab-ko-dic)가 출력한 형태소 열을 받아,
//! 문자 오프셋과 위치 증가분/길이를 계산하고 복합명사를 구성 요소로 분해하여
//! 색인/검색 시스템이 기대하는 순서와 번호의 토큰 스트림을 만들어 냅니다.
//! 형태소 분석 자체는 이 라이브러리의 범위가 아니며, 분석기는
//! [`MorphemeSource`] 트레이트 뒤의 블랙박스로 다룹니다.
//!
//! ## 주요 기능
//!
//! - **복합명사 분해**: 최소 길이 임계값에 따라 복합명사를 구성 명사로 분해
//! - **겹침 토큰**: 어절 전체 토큰과 구성 형태소 토큰을 위치 증가분 0으로 중첩
//! - **풀 기반 스트림**: 소비자가 토큰을 하나씩 당겨 가는 지연 생성
//! - **불변 레코드**: 분석기 내부 메모리를 참조하지 않는 자기 완결적 값 타입
//!
//! ## 사용 예
//!
//! ```
//! use mecab_ko_tokenizer::{TokenGenerator, TsvMorphemes};
//!
//! # fn main() -> mecab_ko_tokenizer::errors::Result<()> {
//! // 외부 형태소 분석기가 "한글win"을 분석한 결과
//! // (surface, tag, length, rlength, feature)
//! let analyzed = "한글\tNNG\t2\t2\tNNG,*,T,한글,*,*,*,*\n\
//!     win\tSL\t3\t3\tSL,*,*,*,*,*,*,*";
//!
//! let mut generator = TokenGenerator::new(TsvMorphemes::new(), Some(3))?;
//! generator.reset(analyzed)?;
//!
//! let token = generator.next_token()?.unwrap();
//! assert_eq!(token.to_string(), "한글:N:1:1:0:2");
//! let token = generator.next_token()?.unwrap();
//! assert_eq!(token.to_string(), "win:SL:1:1:2:5");
//! assert!(generator.next_token()?.is_none());
//! assert_eq!(generator.final_offset(), 5);
//! # Ok(())
//! # }
//! ```

/// 에러 타입 정의
pub mod errors;

/// 토큰 생성기
pub mod generator;

/// 형태소 분석기 연동 인터페이스
pub mod morpheme;

/// 품사 정보 레코드
pub mod pos;

/// 품사 식별자와 변환 테이블
pub mod pos_id;

/// 색인 토큰 타입
pub mod token;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tests;

// Re-exports
pub use generator::{TokenGenerator, TokenIter, DEFAULT_DECOMPOUND_MIN_LENGTH};
pub use morpheme::{MorphemeSource, RawMorpheme, TsvMorphemes};
pub use pos::Pos;
pub use pos_id::PosId;
pub use token::IndexToken;

/// 이 라이브러리의 버전 번호
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
