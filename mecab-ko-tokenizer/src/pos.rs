//! 품사(형태소, 품사 식별자, 오프셋 등) 정보 레코드
//!
//! 이 모듈은 형태소 하나에서 파생되는 모든 메타데이터를 담는 [`Pos`] 레코드를
//! 제공합니다. 레코드는 생성 시점에 자질 문자열을 모두 파싱해 두는 불변 값이며,
//! 반복 상태를 갖지 않습니다.

use std::fmt;

use crate::errors::{MecabKoError, Result};
use crate::morpheme::RawMorpheme;
use crate::pos_id::PosId;

/// 자질 문자열에서 분해 시작 품사가 위치하는 필드 인덱스
const START_POS_INDEX: usize = 4;

/// 자질 문자열에서 분해 끝 품사가 위치하는 필드 인덱스
const END_POS_INDEX: usize = 5;

/// 자질 문자열에서 색인 표현식이 위치하는 필드 인덱스
const INDEX_EXPRESSION_INDEX: usize = 7;

/// 색인 표현식 항목(`surface/tag/positionIncr/positionLength`)의 필드 인덱스
mod expression {
    pub const TERM_INDEX: usize = 0;
    pub const TAG_INDEX: usize = 1;
    pub const POSITION_INCR_INDEX: usize = 2;
    pub const POSITION_LENGTH_INDEX: usize = 3;
    pub const NUM_FIELDS: usize = 4;
}

/// 형태소 하나의 품사, 오프셋, 위치 정보를 담는 레코드
///
/// [`RawMorpheme`]와 직전 형태소의 끝 오프셋으로부터 만들어지며, 파생 필드는
/// 모두 생성 시점에 계산됩니다. 토큰 생성기는 이 레코드를 수정하지 않고,
/// 어절 단위의 위치 번호가 확정된 시점에 새 토큰 값을 만들어 냅니다.
#[derive(Clone, Debug)]
pub struct Pos {
    surface: String,
    pos_id: PosId,
    start_pos_id: PosId,
    end_pos_id: PosId,
    start_offset: usize,
    position_incr: usize,
    position_length: usize,
    space_len: usize,
    index_expression: Option<String>,
}

impl Pos {
    /// 형태소 레코드로부터 `Pos`를 생성합니다.
    ///
    /// 시작 오프셋은 직전 형태소의 끝 오프셋에 이 형태소의 선행 공백 길이
    /// (`rlength - length`)를 더한 값입니다. 품사가 `Compound`/`Inflect`/
    /// `Preanalysis`이면 자질 문자열을 즉시 파싱합니다.
    ///
    /// # 인자
    ///
    /// * `morpheme` - 분석기가 출력한 형태소 레코드
    /// * `prev_end_offset` - 직전 형태소의 끝 오프셋 (문자 단위)
    ///
    /// # 에러
    ///
    /// `rlength < length`이면 [`MecabKoError::InvalidArgument`],
    /// 자질 문자열의 필드가 부족하면 [`MecabKoError::IncompatibleDictionary`]
    pub fn from_morpheme(morpheme: &RawMorpheme, prev_end_offset: usize) -> Result<Self> {
        let space_len = morpheme.rlength.checked_sub(morpheme.length).ok_or_else(|| {
            MecabKoError::invalid_argument("rlength", "must not be less than length")
        })?;
        let pos_id = PosId::from_tag(&morpheme.pos_tag);
        let mut pos = Self {
            surface: morpheme.surface.clone(),
            pos_id,
            start_pos_id: pos_id,
            end_pos_id: pos_id,
            start_offset: prev_end_offset + space_len,
            position_incr: 1,
            position_length: 1,
            space_len,
            index_expression: None,
        };
        if matches!(
            pos_id,
            PosId::Compound | PosId::Inflect | PosId::Preanalysis
        ) {
            pos.parse_feature(&morpheme.feature)?;
        }
        Ok(pos)
    }

    /// 직렬화된 텍스트 표현으로부터 `Pos`를 생성합니다.
    ///
    /// 표현은 슬래시로 구분된 네 필드로 구성됩니다:
    /// `<surface>/<tag>/<positionIncr>/<positionLength>` (예: `명사/NNG/1/1`).
    /// 자질 파싱을 거치지 않으므로 단순 형태소에만 사용할 수 있으며,
    /// 오프셋은 외부에서 공급합니다.
    ///
    /// # 인자
    ///
    /// * `expr` - 직렬화된 텍스트 표현
    /// * `start_offset` - 시작 오프셋 (문자 단위)
    pub fn from_expression(expr: &str, start_offset: usize) -> Result<Self> {
        let fields: Vec<&str> = expr.split('/').collect();
        if fields.len() < expression::NUM_FIELDS {
            return Err(MecabKoError::invalid_format(
                "expression",
                format!("expected {} slash-separated fields: {expr:?}", expression::NUM_FIELDS),
            ));
        }
        let pos_id = PosId::from_tag(fields[expression::TAG_INDEX]);
        Ok(Self {
            surface: fields[expression::TERM_INDEX].to_string(),
            pos_id,
            start_pos_id: pos_id,
            end_pos_id: pos_id,
            start_offset,
            position_incr: fields[expression::POSITION_INCR_INDEX].parse()?,
            position_length: fields[expression::POSITION_LENGTH_INDEX].parse()?,
            space_len: 0,
            index_expression: None,
        })
    }

    /// 쉼표로 구분된 자질 문자열을 파싱합니다.
    ///
    /// `Compound`/`Inflect`/`Preanalysis` 품사에 대해서만 호출됩니다.
    /// 필드 수가 부족하면 사전 버전이 호환되지 않는 것이므로 복구하지 않고
    /// 에러를 반환합니다.
    fn parse_feature(&mut self, feature: &str) -> Result<()> {
        let fields: Vec<&str> = feature.split(',').collect();
        if fields.len() <= INDEX_EXPRESSION_INDEX {
            return Err(MecabKoError::IncompatibleDictionary {
                num_fields: fields.len(),
            });
        }
        match self.pos_id {
            PosId::Inflect | PosId::Preanalysis => {
                self.start_pos_id = PosId::from_tag(fields[START_POS_INDEX]);
                self.end_pos_id = PosId::from_tag(fields[END_POS_INDEX]);
            }
            PosId::Compound => {
                self.start_pos_id = PosId::N;
                self.end_pos_id = PosId::N;
                self.position_length =
                    compound_position_length(fields[INDEX_EXPRESSION_INDEX])?;
            }
            _ => {}
        }
        self.index_expression = Some(fields[INDEX_EXPRESSION_INDEX].to_string());
        Ok(())
    }

    /// 색인 표현식을 분해된 `Pos` 목록으로 전개합니다.
    ///
    /// 각 항목은 표현식에 담긴 자체 위치 증가분/길이를 그대로 갖습니다.
    /// 형태소 전체를 가리키는 항목(표층형이 동일한 항목)은 전체 구간의
    /// 오프셋을 갖고, 나머지 항목들은 왼쪽부터 구간을 나눠 갖습니다.
    ///
    /// # 반환값
    ///
    /// 오프셋이 계산된 분해 항목들
    ///
    /// # 에러
    ///
    /// 색인 표현식이 없거나 항목 포맷이 잘못된 경우
    pub fn index_parts(&self) -> Result<Vec<Pos>> {
        let expression = self.index_expression.as_deref().ok_or_else(|| {
            MecabKoError::invalid_format("index_expression", "the morpheme has no index expression")
        })?;
        let mut parts = Vec::new();
        let mut cursor = self.start_offset;
        for item in expression.split('+') {
            let mut part = Pos::from_expression(item, cursor)?;
            if part.surface == self.surface {
                part.start_offset = self.start_offset;
            } else {
                cursor = part.end_offset();
            }
            parts.push(part);
        }
        Ok(parts)
    }

    /// 표층형을 반환합니다.
    #[inline(always)]
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// 표층형의 문자 수를 반환합니다.
    #[inline(always)]
    pub fn surface_len(&self) -> usize {
        self.surface.chars().count()
    }

    /// 품사 식별자를 반환합니다.
    #[inline(always)]
    pub fn pos_id(&self) -> PosId {
        self.pos_id
    }

    /// 분해 시작 품사 식별자를 반환합니다.
    ///
    /// 단순 형태소는 품사 식별자와 같고, `Compound`는 [`PosId::N`],
    /// `Inflect`/`Preanalysis`는 자질 문자열에서 읽은 값입니다.
    #[inline(always)]
    pub fn start_pos_id(&self) -> PosId {
        self.start_pos_id
    }

    /// 분해 끝 품사 식별자를 반환합니다.
    #[inline(always)]
    pub fn end_pos_id(&self) -> PosId {
        self.end_pos_id
    }

    /// 시작 오프셋을 반환합니다 (문자 단위).
    #[inline(always)]
    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    /// 끝 오프셋을 반환합니다 (문자 단위).
    #[inline(always)]
    pub fn end_offset(&self) -> usize {
        self.start_offset + self.surface_len()
    }

    /// 위치 증가분을 반환합니다.
    #[inline(always)]
    pub fn position_incr(&self) -> usize {
        self.position_incr
    }

    /// 위치 길이를 반환합니다.
    ///
    /// `Compound`는 색인 표현식에서 파싱한 분해 항목 수이고,
    /// 그 외에는 기본값 1입니다.
    #[inline(always)]
    pub fn position_length(&self) -> usize {
        self.position_length
    }

    /// 선행 공백의 길이를 반환합니다 (문자 단위).
    #[inline(always)]
    pub fn space_len(&self) -> usize {
        self.space_len
    }

    /// 선행 공백을 포함한 전체 길이를 반환합니다 (문자 단위).
    #[allow(clippy::len_without_is_empty)]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.space_len + self.surface_len()
    }

    /// 선행 공백이 있는지 여부를 반환합니다.
    #[inline(always)]
    pub fn has_space(&self) -> bool {
        self.space_len > 0
    }

    /// 색인 표현식을 반환합니다.
    ///
    /// `Compound`/`Inflect`/`Preanalysis` 품사에만 존재합니다.
    #[inline(always)]
    pub fn index_expression(&self) -> Option<&str> {
        self.index_expression.as_deref()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}/{}",
            self.surface,
            self.pos_id,
            self.position_incr,
            self.position_length,
            self.start_offset,
            self.end_offset()
        )
    }
}

/// 복합명사 표현식에서 복합명사 자신의 위치 길이를 파싱합니다.
///
/// 색인 표현식의 두 번째 항목이 복합명사 자신을 가리키며, 그 항목의
/// 위치 길이 필드가 분해 항목 수입니다.
fn compound_position_length(expression: &str) -> Result<usize> {
    const COMPOUND_SELF_INDEX: usize = 1;
    let part = expression.split('+').nth(COMPOUND_SELF_INDEX).ok_or_else(|| {
        MecabKoError::invalid_format(
            "index_expression",
            format!("a compound expression needs at least two parts: {expression:?}"),
        )
    })?;
    let field = part
        .split('/')
        .nth(expression::POSITION_LENGTH_INDEX)
        .ok_or_else(|| {
            MecabKoError::invalid_format(
                "index_expression",
                format!("missing position length field: {part:?}"),
            )
        })?;
    Ok(field.parse()?)
}
