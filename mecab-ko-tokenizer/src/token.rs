//! 색인 토큰 타입
//!
//! 이 모듈은 토큰 생성기가 소비자에게 내보내는 최종 토큰 값을 정의합니다.
//! 토큰은 [`Pos`]나 분석기에 대한 역참조를 갖지 않는 자기 완결적인 값이며,
//! 색인 어댑터는 이 값을 프레임워크별 속성 객체로 복사하기만 하면 됩니다.
//!
//! [`Pos`]: crate::pos::Pos

use std::fmt;

use crate::pos::Pos;
use crate::pos_id::PosId;

/// 색인/검색 시스템에 내보내는 토큰
///
/// 표층형, 품사 식별자, 위치 증가분/길이, 문자 단위 오프셋을 담습니다.
/// 위치 증가분 0은 직전 토큰과 같은 텍스트 위치에 겹쳐지는 토큰을,
/// 위치 길이 n은 n개의 위치에 걸치는 토큰을 의미합니다.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexToken {
    surface: String,
    pos_id: PosId,
    position_incr: usize,
    position_length: usize,
    start_offset: usize,
    end_offset: usize,
}

impl IndexToken {
    /// 새 토큰을 생성합니다.
    pub(crate) fn new(
        surface: String,
        pos_id: PosId,
        position_incr: usize,
        position_length: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Self {
            surface,
            pos_id,
            position_incr,
            position_length,
            start_offset,
            end_offset,
        }
    }

    /// `Pos` 레코드로부터 위치 증가분만 바꾼 토큰을 생성합니다.
    pub(crate) fn from_pos(pos: &Pos, position_incr: usize) -> Self {
        Self::new(
            pos.surface().to_string(),
            pos.pos_id(),
            position_incr,
            pos.position_length(),
            pos.start_offset(),
            pos.end_offset(),
        )
    }

    /// 표층형을 반환합니다.
    #[inline(always)]
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// 품사 식별자를 반환합니다.
    ///
    /// 어절 전체를 덮는 토큰은 합성 식별자 [`PosId::Eojeol`]을 갖습니다.
    #[inline(always)]
    pub fn pos_id(&self) -> PosId {
        self.pos_id
    }

    /// 위치 증가분을 반환합니다.
    #[inline(always)]
    pub fn position_incr(&self) -> usize {
        self.position_incr
    }

    /// 위치 길이를 반환합니다.
    #[inline(always)]
    pub fn position_length(&self) -> usize {
        self.position_length
    }

    /// 시작 오프셋을 반환합니다 (문자 단위).
    #[inline(always)]
    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    /// 끝 오프셋을 반환합니다 (문자 단위).
    #[inline(always)]
    pub fn end_offset(&self) -> usize {
        self.end_offset
    }
}

/// 토큰의 정규 디버그 표현
///
/// `<surface>:<posId>:<positionIncr>:<positionLength>:<startOffset>:<endOffset>`
/// 형태로 렌더링합니다. 스트림 전체를 쉼표로 이어 붙인 문자열이 적합성
/// 테스트의 기준 포맷입니다.
impl fmt::Display for IndexToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:{}",
            self.surface,
            self.pos_id,
            self.position_incr,
            self.position_length,
            self.start_offset,
            self.end_offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_rendering() {
        let token = IndexToken::new("형태소".to_string(), PosId::Compound, 0, 2, 0, 3);
        assert_eq!(token.to_string(), "형태소:COMPOUND:0:2:0:3");
    }

    #[test]
    fn test_from_pos_overrides_incr_only() {
        let pos = Pos::from_expression("한글/NNG/1/1", 4).unwrap();
        let token = IndexToken::from_pos(&pos, 0);
        assert_eq!(token.surface(), "한글");
        assert_eq!(token.pos_id(), PosId::N);
        assert_eq!(token.position_incr(), 0);
        assert_eq!(token.position_length(), 1);
        assert_eq!(token.start_offset(), 4);
        assert_eq!(token.end_offset(), 6);
    }
}
