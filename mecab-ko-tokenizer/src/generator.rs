//! 토큰 생성기
//!
//! 이 모듈은 형태소 소스에서 형태소를 당겨 와(pull) 검색 색인용 토큰 스트림을
//! 만들어 내는 상태 기계를 제공합니다. 생성기는 연속된 형태소를 결합 규칙에
//! 따라 하나의 어절 단위로 묶고, 복합명사·활용형·기분석 형태소를 분해하여
//! 겹치는 토큰들을 정확한 순서와 위치 번호로 내보냅니다.
//!
//! 생성기는 최대 어절 하나만큼만 앞서 읽으며, 출력 큐를 모두 비운 뒤에야
//! 다음 형태소를 당겨 옵니다. 인스턴스 간에 공유되는 가변 상태는 없으므로
//! 논리 스트림 하나당 생성기 하나를 사용하면 됩니다.
//!
//! # 예
//!
//! ```
//! use mecab_ko_tokenizer::{TokenGenerator, TsvMorphemes};
//!
//! # fn main() -> mecab_ko_tokenizer::errors::Result<()> {
//! // 외부 분석기가 "형태소"를 복합명사 하나로 분석한 결과
//! let analyzed = "형태소\tCompound\t3\t3\t\
//!     NNG,*,F,형태소,*,*,Compound,형태/NNG/1/1+형태소/COMPOUND/0/2+소/NNG/1/1";
//!
//! let mut generator = TokenGenerator::new(TsvMorphemes::new(), Some(2))?;
//! generator.reset(analyzed)?;
//!
//! let mut rendered = String::new();
//! while let Some(token) = generator.next_token()? {
//!     rendered.push_str(&token.to_string());
//!     rendered.push(',');
//! }
//! assert_eq!(rendered, "형태:N:1:1:0:2,형태소:COMPOUND:0:2:0:3,소:N:1:1:2:3,");
//! # Ok(())
//! # }
//! ```

use std::collections::VecDeque;
use std::mem;

use crate::errors::{MecabKoError, Result};
use crate::morpheme::MorphemeSource;
use crate::pos::Pos;
use crate::pos_id::PosId;
use crate::token::IndexToken;

/// 복합명사 분해의 기본 최소 표층형 길이 (문자 단위)
pub const DEFAULT_DECOMPOUND_MIN_LENGTH: usize = 3;

/// 형태소 열로부터 색인 토큰 스트림을 생성하는 상태 기계
///
/// 현재 어절의 형태소 버퍼와 아직 소비되지 않은 출력 토큰 큐만을 유지하며,
/// 버퍼 크기는 공백으로 구분되는 단어 하나의 형태소 수로 한정됩니다.
///
/// 분해 임계값은 `Option<usize>`로 표현합니다. `None`은 분해를 끄는
/// 센티널이고, `Some(n)`은 표층형이 `n`자 이상인 복합명사만 분해합니다.
#[derive(Debug)]
pub struct TokenGenerator<S> {
    source: S,
    decompound_min_length: Option<usize>,
    run: Vec<Pos>,
    pending: VecDeque<IndexToken>,
    prev_end_offset: usize,
    final_offset: usize,
    exhausted: bool,
}

impl<S: MorphemeSource> TokenGenerator<S> {
    /// 새 생성기를 만듭니다.
    ///
    /// # 인자
    ///
    /// * `source` - 형태소를 공급하는 소스
    /// * `decompound_min_length` - 복합명사 분해의 최소 표층형 길이.
    ///   `None`이면 분해하지 않습니다.
    ///
    /// # 에러
    ///
    /// `decompound_min_length`가 `Some(0)`이면
    /// [`MecabKoError::InvalidArgument`]
    pub fn new(source: S, decompound_min_length: Option<usize>) -> Result<Self> {
        if decompound_min_length == Some(0) {
            return Err(MecabKoError::invalid_argument(
                "decompound_min_length",
                "must be at least 1",
            ));
        }
        Ok(Self {
            source,
            decompound_min_length,
            run: Vec::new(),
            pending: VecDeque::new(),
            prev_end_offset: 0,
            final_offset: 0,
            exhausted: false,
        })
    }

    /// 생성기를 새 입력으로 다시 지정합니다.
    ///
    /// 버퍼된 상태를 모두 폐기하고 오프셋 계산을 0에서 다시 시작합니다.
    /// 동일한 입력으로 다시 실행하면 첫 실행과 동일한 출력이 나옵니다.
    ///
    /// # 인자
    ///
    /// * `input` - 형태소 소스에 전달할 새 입력
    pub fn reset(&mut self, input: &str) -> Result<()> {
        self.source.reset(input)?;
        self.run.clear();
        self.pending.clear();
        self.prev_end_offset = 0;
        self.final_offset = 0;
        self.exhausted = false;
        Ok(())
    }

    /// 다음 토큰을 반환합니다.
    ///
    /// 출력 큐가 비어 있으면 다음 어절 단위가 완성될 때까지 형태소를
    /// 당겨 온 뒤 토큰을 내보냅니다.
    ///
    /// # 반환값
    ///
    /// 토큰이 남아 있으면 `Some(토큰)`, 스트림이 끝났으면 `None`
    ///
    /// # 에러
    ///
    /// 자질 문자열 필드 부족([`MecabKoError::IncompatibleDictionary`]) 등
    /// 사전 비호환 에러는 치명적이며 현재 토큰 생성을 중단해야 합니다.
    pub fn next_token(&mut self) -> Result<Option<IndexToken>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                self.final_offset = self.final_offset.max(token.end_offset());
                return Ok(Some(token));
            }
            if self.exhausted {
                return Ok(None);
            }
            self.pull()?;
        }
    }

    /// 토큰 이터레이터를 만듭니다.
    ///
    /// [`next_token`](Self::next_token)을 감싸는 이터레이터 어댑터입니다.
    pub fn token_iter(&mut self) -> TokenIter<'_, S> {
        TokenIter { generator: self }
    }

    /// 마지막으로 내보낸 토큰의 끝 오프셋을 반환합니다.
    ///
    /// 스트림 소진 후 소비자가 마무리 처리(최종 오프셋 기록 등)에
    /// 사용합니다. 아직 아무 토큰도 내보내지 않았다면 0입니다.
    #[inline(always)]
    pub fn final_offset(&self) -> usize {
        self.final_offset
    }

    /// 다음 어절 단위가 완성되거나 입력이 끝날 때까지 형태소를 읽습니다.
    fn pull(&mut self) -> Result<()> {
        while let Some(morpheme) = self.source.next_morpheme()? {
            let pos = Pos::from_morpheme(&morpheme, self.prev_end_offset)?;
            self.prev_end_offset = pos.end_offset();
            if pos.pos_id().is_skippable() {
                // 기호류는 토큰을 만들지 않지만 오프셋 계산에는 반영된다.
                if self.run.is_empty() {
                    continue;
                }
                self.flush_run()?;
                return Ok(());
            }
            match self.run.last() {
                None => self.run.push(pos),
                Some(last) if !pos.has_space() && is_appendable(last, &pos) => {
                    self.run.push(pos);
                }
                Some(_) => {
                    self.flush_run()?;
                    self.run.push(pos);
                    return Ok(());
                }
            }
        }
        self.exhausted = true;
        if !self.run.is_empty() {
            self.flush_run()?;
        }
        Ok(())
    }

    /// 버퍼된 어절 단위를 토큰들로 변환해 출력 큐에 넣습니다.
    ///
    /// 형태소가 둘 이상 결합된 어절은 전체를 덮는 합성 [`PosId::Eojeol`]
    /// 토큰을 먼저 내보내고, 그 뒤에 색인 대상 형태소들을 위치 증가분 0으로
    /// 겹쳐 내보냅니다. 단독 형태소 어절은 합성 토큰 없이 형태소 자신을
    /// 내보냅니다.
    fn flush_run(&mut self) -> Result<()> {
        let run = mem::take(&mut self.run);
        let (first, last) = match (run.first(), run.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Ok(()),
        };
        let multi = run.len() > 1;
        let mut anchored = false;
        if multi {
            let surface: String = run.iter().map(|pos| pos.surface()).collect();
            self.pending.push_back(IndexToken::new(
                surface,
                PosId::Eojeol,
                1,
                1,
                first.start_offset(),
                last.end_offset(),
            ));
            anchored = true;
        }
        for pos in &run {
            match pos.pos_id() {
                PosId::Compound => self.append_compound(pos, &mut anchored)?,
                PosId::Preanalysis => self.append_index_parts(pos, &mut anchored)?,
                PosId::Inflect => self.append_inflect(pos, multi, &mut anchored)?,
                pos_id if multi => {
                    if pos_id.is_indexable() {
                        self.pending.push_back(IndexToken::from_pos(pos, 0));
                    }
                }
                _ => {
                    let incr = usize::from(!anchored);
                    self.pending.push_back(IndexToken::from_pos(pos, incr));
                    anchored = true;
                }
            }
        }
        Ok(())
    }

    /// 복합명사를 토큰으로 변환합니다.
    ///
    /// 분해가 켜져 있고 표층형 길이가 임계값 이상이면 색인 표현식의 항목들을
    /// 그대로 내보냅니다. 그렇지 않으면 복합명사 전체를 토큰 하나로
    /// 내보내되, 위치 길이는 분해 항목 수를 유지하여 구문 질의가 분해된
    /// 문서와도 일치하도록 합니다.
    fn append_compound(&mut self, pos: &Pos, anchored: &mut bool) -> Result<()> {
        let decompound = self
            .decompound_min_length
            .is_some_and(|min| pos.surface_len() >= min);
        if decompound {
            self.append_index_parts(pos, anchored)
        } else {
            let incr = usize::from(!*anchored);
            self.pending.push_back(IndexToken::from_pos(pos, incr));
            *anchored = true;
            Ok(())
        }
    }

    /// 색인 표현식의 분해 항목들을 순서대로 내보냅니다.
    ///
    /// 이 어절에서 이미 토큰이 나갔다면 첫 항목의 위치 증가분을 0으로
    /// 내려 같은 위치에 겹칩니다.
    fn append_index_parts(&mut self, pos: &Pos, anchored: &mut bool) -> Result<()> {
        for (i, part) in pos.index_parts()?.iter().enumerate() {
            let incr = if i == 0 && *anchored {
                0
            } else {
                part.position_incr()
            };
            self.pending.push_back(IndexToken::from_pos(part, incr));
        }
        *anchored = true;
        Ok(())
    }

    /// 활용형 형태소를 토큰으로 변환합니다.
    ///
    /// 단독 형태소 어절이면 형태소 자신을 내보냅니다. 분해 시작 품사가
    /// 색인 대상이고 어간 표층형이 전체 표층형과 다르면 어간을 위치 증가분
    /// 0, 축소된 오프셋으로 추가합니다.
    fn append_inflect(&mut self, pos: &Pos, multi: bool, anchored: &mut bool) -> Result<()> {
        if !multi {
            let incr = usize::from(!*anchored);
            self.pending.push_back(IndexToken::from_pos(pos, incr));
            *anchored = true;
        }
        if !pos.start_pos_id().is_indexable() {
            return Ok(());
        }
        let Some(expression) = pos.index_expression() else {
            return Ok(());
        };
        let Some(head_expr) = expression.split('+').next() else {
            return Ok(());
        };
        let head = Pos::from_expression(head_expr, pos.start_offset())?;
        if head.surface() != pos.surface() {
            self.pending.push_back(IndexToken::from_pos(&head, 0));
        }
        Ok(())
    }
}

/// 두 형태소가 하나의 어절 단위로 결합 가능한지 판단합니다.
///
/// 결합 여부는 왼쪽의 분해 끝 품사와 오른쪽의 분해 시작 품사로 결정합니다.
/// 조사, 어미, 파생 접미사, 긍정 지정사는 어떤 왼쪽에도 붙을 수 있고,
/// 보조 용언은 어미 뒤에만 붙습니다.
fn is_appendable(left: &Pos, right: &Pos) -> bool {
    match right.start_pos_id() {
        PosId::J | PosId::E | PosId::Xsn | PosId::Xsv | PosId::Xsa | PosId::Vcp => true,
        PosId::Vx => left.end_pos_id() == PosId::E,
        _ => false,
    }
}

/// 토큰 이터레이터
///
/// [`TokenGenerator::next_token`]을 감싸 `Result<IndexToken>` 항목을
/// 순서대로 돌려줍니다.
pub struct TokenIter<'a, S> {
    generator: &'a mut TokenGenerator<S>,
}

impl<S: MorphemeSource> Iterator for TokenIter<'_, S> {
    type Item = Result<IndexToken>;

    fn next(&mut self) -> Option<Self::Item> {
        self.generator.next_token().transpose()
    }
}
