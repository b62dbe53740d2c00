//! 품사(POS) 식별자 정의
//!
//! 이 모듈은 형태소 분석기가 출력하는 세부 품사 태그를 토큰 생성에 필요한
//! 품사 식별자로 변환하는 테이블을 제공합니다. 테이블은 프로세스 전역의
//! 읽기 전용 상수 데이터이며, 독립적인 생성기 인스턴스들이 동시에 참조해도
//! 안전합니다.

use std::fmt;
use std::sync::LazyLock;

use hashbrown::HashMap;

/// 품사 식별자
///
/// mecab-ko-dic의 세부 품사 태그를 묶은 식별자입니다. 명사류 태그
/// (`NNG`/`NNP`/`NNB`/`NNBC`/`NR`/`NP`)는 모두 [`PosId::N`]으로, 조사류는
/// [`PosId::J`]로, 어미류는 [`PosId::E`]로 합쳐집니다.
///
/// [`PosId::Eojeol`]은 분석기가 직접 출력하지 않는 합성 식별자로,
/// 토큰 생성기가 어절 전체를 덮는 토큰에 부여합니다.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PosId {
    /// 명사 (NNG, NNP, NNB, NNBC, NR, NP)
    N,
    /// 복합명사
    Compound,
    /// 활용형 축약 (하 + 았 = 했 등)
    Inflect,
    /// 기분석 항목
    Preanalysis,
    /// 어절 전체를 덮는 합성 식별자
    Eojeol,
    /// 동사
    Vv,
    /// 형용사
    Va,
    /// 보조 용언
    Vx,
    /// 긍정 지정사 (이다)
    Vcp,
    /// 부정 지정사 (아니다)
    Vcn,
    /// 관형사
    Mm,
    /// 일반 부사
    Mag,
    /// 접속 부사
    Maj,
    /// 감탄사
    Ic,
    /// 조사 (JKS, JKC, JKG, JKO, JKB, JKV, JKQ, JX, JC)
    J,
    /// 어미 (EP, EF, EC, ETN, ETM)
    E,
    /// 체언 접두사
    Xpn,
    /// 명사 파생 접미사
    Xsn,
    /// 동사 파생 접미사
    Xsv,
    /// 형용사 파생 접미사
    Xsa,
    /// 어근
    Xr,
    /// 외국어
    Sl,
    /// 한자
    Sh,
    /// 숫자
    Sn,
    /// 마침표, 물음표, 느낌표
    Sf,
    /// 줄임표
    Se,
    /// 여는 괄호
    Sso,
    /// 닫는 괄호
    Ssc,
    /// 구분자
    Sc,
    /// 기타 기호
    Sy,
    /// 미등록어 또는 테이블에 없는 태그
    Unknown,
}

/// 품사 태그 문자열을 [`PosId`]로 변환하는 전역 테이블
static TAG_TABLE: LazyLock<HashMap<&'static str, PosId>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for tag in ["NNG", "NNP", "NNB", "NNBC", "NR", "NP"] {
        table.insert(tag, PosId::N);
    }
    for tag in ["JKS", "JKC", "JKG", "JKO", "JKB", "JKV", "JKQ", "JX", "JC"] {
        table.insert(tag, PosId::J);
    }
    for tag in ["EP", "EF", "EC", "ETN", "ETM"] {
        table.insert(tag, PosId::E);
    }
    table.insert("COMPOUND", PosId::Compound);
    table.insert("INFLECT", PosId::Inflect);
    table.insert("PREANALYSIS", PosId::Preanalysis);
    table.insert("EOJEOL", PosId::Eojeol);
    table.insert("VV", PosId::Vv);
    table.insert("VA", PosId::Va);
    table.insert("VX", PosId::Vx);
    table.insert("VCP", PosId::Vcp);
    table.insert("VCN", PosId::Vcn);
    table.insert("MM", PosId::Mm);
    table.insert("MAG", PosId::Mag);
    table.insert("MAJ", PosId::Maj);
    table.insert("IC", PosId::Ic);
    table.insert("XPN", PosId::Xpn);
    table.insert("XSN", PosId::Xsn);
    table.insert("XSV", PosId::Xsv);
    table.insert("XSA", PosId::Xsa);
    table.insert("XR", PosId::Xr);
    table.insert("SL", PosId::Sl);
    table.insert("SH", PosId::Sh);
    table.insert("SN", PosId::Sn);
    table.insert("SF", PosId::Sf);
    table.insert("SE", PosId::Se);
    table.insert("SSO", PosId::Sso);
    table.insert("SSC", PosId::Ssc);
    table.insert("SC", PosId::Sc);
    table.insert("SY", PosId::Sy);
    table.insert("UNKNOWN", PosId::Unknown);
    table
});

impl PosId {
    /// 품사 태그 문자열을 품사 식별자로 변환합니다.
    ///
    /// 대소문자를 구분하지 않으며, 테이블에 없는 태그는 에러가 아니라
    /// [`PosId::Unknown`]으로 변환됩니다.
    ///
    /// # 인자
    ///
    /// * `tag` - 형태소 분석기가 출력한 품사 태그 문자열
    ///
    /// # 반환값
    ///
    /// 대응하는 품사 식별자
    pub fn from_tag(tag: &str) -> Self {
        if let Some(&pos_id) = TAG_TABLE.get(tag) {
            return pos_id;
        }
        TAG_TABLE
            .get(tag.trim().to_uppercase().as_str())
            .copied()
            .unwrap_or(Self::Unknown)
    }

    /// 품사 식별자의 정규 이름을 반환합니다.
    ///
    /// 토큰 스트림의 정규 표현(`surface:posId:...`)에 사용되는 이름입니다.
    pub fn name(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::Compound => "COMPOUND",
            Self::Inflect => "INFLECT",
            Self::Preanalysis => "PREANALYSIS",
            Self::Eojeol => "EOJEOL",
            Self::Vv => "VV",
            Self::Va => "VA",
            Self::Vx => "VX",
            Self::Vcp => "VCP",
            Self::Vcn => "VCN",
            Self::Mm => "MM",
            Self::Mag => "MAG",
            Self::Maj => "MAJ",
            Self::Ic => "IC",
            Self::J => "J",
            Self::E => "E",
            Self::Xpn => "XPN",
            Self::Xsn => "XSN",
            Self::Xsv => "XSV",
            Self::Xsa => "XSA",
            Self::Xr => "XR",
            Self::Sl => "SL",
            Self::Sh => "SH",
            Self::Sn => "SN",
            Self::Sf => "SF",
            Self::Se => "SE",
            Self::Sso => "SSO",
            Self::Ssc => "SSC",
            Self::Sc => "SC",
            Self::Sy => "SY",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// 토큰을 전혀 만들지 않고 건너뛰는 기호류 품사인지 판단합니다.
    #[inline(always)]
    pub(crate) fn is_skippable(self) -> bool {
        matches!(
            self,
            Self::Sf | Self::Se | Self::Sso | Self::Ssc | Self::Sc | Self::Sy
        )
    }

    /// 어절 토큰과 겹쳐서 단독 색인 토큰을 만드는 품사인지 판단합니다.
    #[inline(always)]
    pub(crate) fn is_indexable(self) -> bool {
        matches!(
            self,
            Self::N
                | Self::Mag
                | Self::Mm
                | Self::Xr
                | Self::Sl
                | Self::Sh
                | Self::Sn
                | Self::Unknown
        )
    }
}

impl fmt::Display for PosId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
