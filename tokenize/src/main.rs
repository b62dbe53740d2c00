//! 색인 토큰 생성을 실행하는 유틸리티
//!
//! 이 바이너리는 표준 입력에서 분석된 형태소 TSV
//! (`surface<TAB>tag<TAB>length<TAB>rlength<TAB>feature`, 빈 줄이 문서 구분)를
//! 읽어, 지정된 출력 형식(stream, detail)으로 색인 토큰을 출력합니다.

use std::error::Error;
use std::io::{BufRead, BufWriter, Write};
use std::str::FromStr;

use mecab_ko_tokenizer::{
    MorphemeSource, TokenGenerator, TsvMorphemes, DEFAULT_DECOMPOUND_MIN_LENGTH,
};

use clap::Parser;

/// 출력 모드
#[derive(Clone, Debug)]
enum OutputMode {
    Stream,
    Detail,
}

/// `OutputMode`의 `FromStr` 구현
impl FromStr for OutputMode {
    type Err = &'static str;

    /// 문자열에서 출력 모드를 파싱한다
    ///
    /// # 인자
    ///
    /// * `mode` - 파싱 대상 문자열 ("stream", "detail" 중 하나)
    ///
    /// # 반환값
    ///
    /// 파싱에 성공하면 대응하는 `OutputMode`, 실패하면 에러 메시지
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "stream" => Ok(Self::Stream),
            "detail" => Ok(Self::Detail),
            _ => Err("Could not parse a mode"),
        }
    }
}

/// 커맨드라인 인자
#[derive(Parser, Debug)]
#[clap(
    name = "tokenize",
    about = "Generates index tokens from analyzed morphemes"
)]
struct Args {
    /// Minimum length of compound nouns to decompound.
    #[clap(short = 'd', long, default_value_t = DEFAULT_DECOMPOUND_MIN_LENGTH)]
    decompound_min_length: usize,

    /// Disables decompounding of compound nouns.
    #[clap(short = 'D', long)]
    no_decompound: bool,

    /// Output mode. Choices are stream and detail.
    #[clap(short = 'O', long, default_value = "stream")]
    output_mode: OutputMode,
}

/// 메인 함수
///
/// 표준 입력에서 형태소 TSV 블록을 읽어 색인 토큰을 생성하고,
/// 지정된 형식으로 결과를 표준 출력에 출력합니다.
///
/// # 반환값
///
/// 실행이 성공하면 `Ok(())`, 에러가 발생하면 에러 정보
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let decompound_min_length = if args.no_decompound {
        None
    } else {
        Some(args.decompound_min_length)
    };
    let mut generator = TokenGenerator::new(TsvMorphemes::new(), decompound_min_length)?;

    eprintln!("Ready to generate tokens");

    let is_tty = atty::is(atty::Stream::Stdout);

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());
    let mut block = String::new();
    let lines = std::io::stdin().lock().lines();
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            if !block.is_empty() {
                emit_tokens(&mut generator, &block, &args.output_mode, &mut out)?;
                block.clear();
                if is_tty {
                    out.flush()?;
                }
            }
        } else {
            block.push_str(&line);
            block.push('\n');
        }
    }
    if !block.is_empty() {
        emit_tokens(&mut generator, &block, &args.output_mode, &mut out)?;
    }
    out.flush()?;

    Ok(())
}

/// 형태소 TSV 블록 하나를 토큰화해 출력한다
///
/// # 인자
///
/// * `generator` - 색인 토큰 생성기
/// * `block` - 형태소 TSV 블록
/// * `mode` - 출력 모드
/// * `out` - 출력 대상
fn emit_tokens<S, W>(
    generator: &mut TokenGenerator<S>,
    block: &str,
    mode: &OutputMode,
    out: &mut W,
) -> Result<(), Box<dyn Error>>
where
    S: MorphemeSource,
    W: Write,
{
    generator.reset(block)?;
    match mode {
        OutputMode::Stream => {
            while let Some(token) = generator.next_token()? {
                write!(out, "{token},")?;
            }
            out.write_all(b"\n")?;
        }
        OutputMode::Detail => {
            while let Some(token) = generator.next_token()? {
                writeln!(
                    out,
                    "{}\t{}\tincr={}\tlength={}\tstart={}\tend={}",
                    token.surface(),
                    token.pos_id(),
                    token.position_incr(),
                    token.position_length(),
                    token.start_offset(),
                    token.end_offset(),
                )?;
            }
            out.write_all(b"EOS\n")?;
        }
    }
    Ok(())
}
