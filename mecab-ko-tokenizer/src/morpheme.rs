//! 형태소 분석기 연동 인터페이스
//!
//! 이 모듈은 외부 형태소 분석기가 출력하는 형태소 레코드와, 그 출력을
//! 토큰 생성기에 공급하는 [`MorphemeSource`] 트레이트를 정의합니다.
//! 분석기 내부 메모리를 참조하지 않도록 필요한 모든 필드를 생성 시점에
//! 복사해 둔 불변 값 타입만을 사용합니다.

use std::collections::VecDeque;

use crate::errors::{MecabKoError, Result};

/// TSV 한 줄이 갖는 필드 수 (surface, tag, length, rlength, feature)
const NUM_TSV_FIELDS: usize = 5;

/// 외부 형태소 분석기가 출력한 형태소 하나를 담는 레코드
///
/// 분석기 한 번의 출력마다 하나씩 만들어지는 불변 값입니다.
///
/// # 필드
///
/// * `surface` - 표층형 (원문에 나타난 문자열)
/// * `pos_tag` - 품사 태그 문자열 (사전 의존적)
/// * `feature` - 쉼표로 구분된 자질 문자열 (사전 의존적)
/// * `length` - 표층형이 차지하는 문자 수
/// * `rlength` - 선행 공백을 포함한 문자 수
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawMorpheme {
    /// 표층형
    pub surface: String,
    /// 품사 태그 문자열
    pub pos_tag: String,
    /// 쉼표로 구분된 자질 문자열
    pub feature: String,
    /// 표층형이 차지하는 문자 수
    pub length: usize,
    /// 선행 공백을 포함한 문자 수
    pub rlength: usize,
}

impl RawMorpheme {
    /// 새 형태소 레코드를 생성합니다.
    pub fn new<S1, S2, S3>(surface: S1, pos_tag: S2, feature: S3, length: usize, rlength: usize) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self {
            surface: surface.into(),
            pos_tag: pos_tag.into(),
            feature: feature.into(),
            length,
            rlength,
        }
    }
}

/// 형태소 열을 공급하는 소스
///
/// 외부 형태소 분석기를 추상화한 트레이트입니다. 소스는 유한하고 순서가
/// 있는 형태소 열을 공급하며, 새 입력으로 다시 지정할 수 있어야 합니다.
/// 차단 I/O 없이 동기적으로 동작한다고 가정합니다.
pub trait MorphemeSource {
    /// 소스를 새 입력으로 다시 지정합니다.
    ///
    /// 이전 입력에 대한 내부 상태는 모두 폐기됩니다.
    ///
    /// # 인자
    ///
    /// * `input` - 분석할 새 입력
    fn reset(&mut self, input: &str) -> Result<()>;

    /// 다음 형태소를 반환합니다.
    ///
    /// # 반환값
    ///
    /// 형태소가 남아 있으면 `Some(형태소)`, 입력이 끝났으면 `None`
    fn next_morpheme(&mut self) -> Result<Option<RawMorpheme>>;
}

/// TSV 텍스트를 재생하는 형태소 소스
///
/// 형태소 하나를 탭으로 구분된 한 줄로 표현하는 텍스트 포맷을 읽습니다:
///
/// ```text
/// surface<TAB>tag<TAB>length<TAB>rlength<TAB>feature
/// ```
///
/// 빈 줄은 무시됩니다. 분석기 출력을 파일로 받아 재생하거나, 테스트와
/// 문서 예제에서 분석 결과를 인라인으로 기술할 때 사용합니다.
///
/// # 예
///
/// ```
/// use mecab_ko_tokenizer::{MorphemeSource, TsvMorphemes};
///
/// let mut morphemes = TsvMorphemes::new();
/// morphemes.reset("한글\tNNG\t2\t2\tNNG,*,T,한글,*,*,*,*").unwrap();
///
/// let m = morphemes.next_morpheme().unwrap().unwrap();
/// assert_eq!(m.surface, "한글");
/// assert_eq!(m.pos_tag, "NNG");
/// assert!(morphemes.next_morpheme().unwrap().is_none());
/// ```
#[derive(Default, Debug)]
pub struct TsvMorphemes {
    queue: VecDeque<RawMorpheme>,
}

impl TsvMorphemes {
    /// 빈 소스를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MorphemeSource for TsvMorphemes {
    fn reset(&mut self, input: &str) -> Result<()> {
        self.queue.clear();
        for (i, line) in input.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            self.queue.push_back(parse_tsv_line(line, i + 1)?);
        }
        Ok(())
    }

    fn next_morpheme(&mut self) -> Result<Option<RawMorpheme>> {
        Ok(self.queue.pop_front())
    }
}

/// TSV 한 줄을 형태소 레코드로 파싱합니다.
fn parse_tsv_line(line: &str, line_no: usize) -> Result<RawMorpheme> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != NUM_TSV_FIELDS {
        return Err(MecabKoError::invalid_format(
            "morpheme_tsv",
            format!(
                "line {}: expected {} tab-separated fields, got {}",
                line_no,
                NUM_TSV_FIELDS,
                fields.len()
            ),
        ));
    }
    Ok(RawMorpheme::new(
        fields[0],
        fields[1],
        fields[4],
        fields[2].parse()?,
        fields[3].parse()?,
    ))
}
