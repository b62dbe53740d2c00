//! 테스트용 유틸리티
//!
//! 실제 분석기 없이 토큰 생성을 검증할 수 있도록, 미리 계산해 둔
//! mecab-ko-dic 분석 결과를 재생하는 형태소 소스를 제공합니다.

use hashbrown::HashMap;

use crate::errors::{MecabKoError, Result};
use crate::generator::TokenGenerator;
use crate::morpheme::{MorphemeSource, RawMorpheme, TsvMorphemes};

macro_rules! hashmap {
    ( $($k:expr => $v:expr,)* ) => {
        {
            #[allow(unused_mut)]
            let mut h = hashbrown::HashMap::new();
            $(
                h.insert($k, $v);
            )*
            h
        }
    };
    ( $($k:expr => $v:expr),* ) => {
        hashmap![$( $k => $v, )*]
    };
}

const SYMBOLS_ONLY: &str = "!@#$%^&*\tSY\t8\t8\tSY,*,*,*,*,*,*,*";

const HANGUL_WIN: &str = "한글\tNNG\t2\t2\tNNG,*,T,한글,*,*,*,*\n\
    win\tSL\t3\t3\tSL,*,*,*,*,*,*,*";

const HYEONGTAESO: &str = "형태소\tCompound\t3\t3\t\
    NNG,*,F,형태소,*,*,Compound,형태/NNG/1/1+형태소/COMPOUND/0/2+소/NNG/1/1";

const GAGOMUNHEON: &str = "가고문헌\tCompound\t4\t4\t\
    NNG,*,T,가고문헌,*,*,Compound,가고/NNG/1/1+가고문헌/COMPOUND/0/2+문헌/NNG/1/1";

const SHORT_SENTENCE: &str = "꽃\tNNG\t1\t1\tNNG,*,T,꽃,*,*,*,*\n\
    배달\tNNG\t2\t2\tNNG,*,T,배달,*,*,*,*\n\
    꽃망울\tCompound\t3\t4\t\
    NNG,*,T,꽃망울,*,*,Compound,꽃/NNG/1/1+꽃망울/COMPOUND/0/2+망울/NNG/1/1\n\
    오토바이\tNNG\t4\t5\tNNG,*,F,오토바이,*,*,*,*";

const MUGUNGHWA_SENTENCE: &str = "소설\tNNG\t2\t2\tNNG,*,T,소설,*,*,*,*\n\
    무궁화\tCompound\t3\t4\t\
    NNG,*,F,무궁화,*,*,Compound,무궁/NNG/1/1+무궁화/COMPOUND/0/2+화/NNG/1/1\n\
    꽃\tNNG\t1\t1\tNNG,*,T,꽃,*,*,*,*\n\
    이\tJKS\t1\t1\tJKS,*,F,이,*,*,*,*\n\
    피\tVV\t1\t2\tVV,*,F,피,*,*,*,*\n\
    었\tEP\t1\t1\tEP,*,T,었,*,*,*,*\n\
    습니다\tEF\t3\t3\tEF,*,F,습니다,*,*,*,*\n\
    .\tSF\t1\t1\tSF,*,*,*,*,*,*,*";

const COMPLEX_SENTENCE: &str = "지금\tNNG\t2\t2\tNNG,*,T,지금,*,*,*,*\n\
    보다\tJX\t2\t2\tJX,*,F,보다,*,*,*,*\n\
    어리\tVA\t2\t3\tVA,*,F,어리,*,*,*,*\n\
    고\tEC\t1\t1\tEC,*,F,고,*,*,*,*\n\
    민감\tXR\t2\t3\tXR,*,T,민감,*,*,*,*\n\
    하\tXSA\t1\t1\tXSA,*,F,하,*,*,*,*\n\
    던\tETM\t1\t1\tETM,*,T,던,*,*,*,*\n\
    시절\tNNG\t2\t3\tNNG,*,T,시절,*,*,*,*\n\
    아버지\tNNG\t3\t4\tNNG,*,F,아버지,*,*,*,*\n\
    가\tJKS\t1\t1\tJKS,*,F,가,*,*,*,*\n\
    충고\tNNG\t2\t3\tNNG,*,F,충고,*,*,*,*\n\
    를\tJKO\t1\t1\tJKO,*,T,를,*,*,*,*\n\
    한마디\tCompound\t3\t4\t\
    NNG,*,F,한마디,*,*,Compound,한/NNG/1/1+한마디/COMPOUND/0/2+마디/NNG/1/1\n\
    했\tInflect\t1\t2\tVV+EP,*,T,했,VV,EP,Inflect,하/VV/1/1+았/EP/1/1\n\
    는데\tEC\t2\t2\tEC,*,F,는데,*,*,*,*\n\
    아직\tMAG\t2\t3\tMAG,*,T,아직,*,*,*,*\n\
    도\tJX\t1\t1\tJX,*,F,도,*,*,*,*\n\
    그\tMM\t1\t2\tMM,*,F,그,*,*,*,*\n\
    말\tNNG\t1\t2\tNNG,*,T,말,*,*,*,*\n\
    이\tJKS\t1\t1\tJKS,*,F,이,*,*,*,*\n\
    기억난다\tInflect\t4\t5\t\
    VV+EC,*,F,기억난다,VV,EC,Inflect,기억나/VV/1/1+ㄴ다/EC/1/1\n\
    .\tSF\t1\t1\tSF,*,*,*,*,*,*,*";

const HANMADIREUL: &str = "한마디\tCompound\t3\t3\t\
    NNG,*,F,한마디,*,*,Compound,한/NNG/1/1+한마디/COMPOUND/0/2+마디/NNG/1/1\n\
    를\tJKO\t1\t1\tJKO,*,T,를,*,*,*,*";

const GEOYA: &str = "거야\tInflect\t2\t2\t\
    NNB+VCP+EF,*,F,거야,NNB,EF,Inflect,것/NNB/1/1+이야/VCP/1/1";

const PREANALYSIS_SENTENCE: &str = "은전한닢\tPreanalysis\t4\t4\t\
    NNG,*,T,은전한닢,NNG,NNG,Preanalysis,은전/NNG/1/1+한/NNG/1/1+닢/NNG/1/1\n\
    프로젝트\tNNG\t4\t5\tNNG,*,F,프로젝트,*,*,*,*\n\
    는\tJX\t1\t1\tJX,*,T,는,*,*,*,*\n\
    오픈\tNNG\t2\t3\tNNG,*,T,오픈,*,*,*,*\n\
    소스\tNNG\t2\t2\tNNG,*,F,소스,*,*,*,*\n\
    이\tVCP\t1\t1\tVCP,*,F,이,*,*,*,*\n\
    다\tEF\t1\t1\tEF,*,F,다,*,*,*,*\n\
    .\tSF\t1\t1\tSF,*,*,*,*,*,*,*";

const UNKNOWN_SENTENCE: &str = "걀꿀\tUNKNOWN\t2\t2\tUNKNOWN,*,T,걀꿀,*,*,*,*\n\
    없\tVA\t1\t2\tVA,*,T,없,*,*,*,*\n\
    는\tETM\t1\t1\tETM,*,T,는,*,*,*,*\n\
    단어\tNNG\t2\t3\tNNG,*,F,단어,*,*,*,*";

/// 미리 계산된 분석 결과를 재생하는 테스트용 형태소 분석기
///
/// 입력 텍스트를 키로 하여 mecab-ko-dic 분석 결과(TSV)를 찾아 재생합니다.
pub(crate) struct FixtureAnalyzer {
    analyses: HashMap<&'static str, &'static str>,
    morphemes: TsvMorphemes,
}

impl FixtureAnalyzer {
    pub(crate) fn new() -> Self {
        Self {
            analyses: hashmap![
                "" => "",
                "!@#$%^&*" => SYMBOLS_ONLY,
                "한글win" => HANGUL_WIN,
                "형태소" => HYEONGTAESO,
                "가고문헌" => GAGOMUNHEON,
                "꽃배달 꽃망울 오토바이" => SHORT_SENTENCE,
                "소설 무궁화꽃이 피었습니다." => MUGUNGHWA_SENTENCE,
                "지금보다 어리고 민감하던 시절 아버지가 충고를 한마디 했는데 아직도 그 말이 기억난다." => COMPLEX_SENTENCE,
                "한마디를" => HANMADIREUL,
                "거야" => GEOYA,
                "은전한닢 프로젝트는 오픈소스이다." => PREANALYSIS_SENTENCE,
                "걀꿀 없는 단어" => UNKNOWN_SENTENCE,
            ],
            morphemes: TsvMorphemes::new(),
        }
    }
}

impl MorphemeSource for FixtureAnalyzer {
    fn reset(&mut self, input: &str) -> Result<()> {
        let tsv = self.analyses.get(input).ok_or_else(|| {
            MecabKoError::invalid_argument("input", format!("no fixture analysis for {input:?}"))
        })?;
        self.morphemes.reset(tsv)
    }

    fn next_morpheme(&mut self) -> Result<Option<RawMorpheme>> {
        self.morphemes.next_morpheme()
    }
}

/// 픽스처 분석기를 사용하는 생성기를 만듭니다.
pub(crate) fn new_generator(
    decompound_min_length: Option<usize>,
) -> TokenGenerator<FixtureAnalyzer> {
    TokenGenerator::new(FixtureAnalyzer::new(), decompound_min_length).unwrap()
}

/// 남은 토큰을 모두 당겨 정규 표현으로 이어 붙입니다.
pub(crate) fn generator_to_string<S: MorphemeSource>(
    generator: &mut TokenGenerator<S>,
) -> String {
    let mut result = String::new();
    while let Some(token) = generator.next_token().unwrap() {
        result.push_str(&token.to_string());
        result.push(',');
    }
    result
}
