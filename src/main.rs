//! translit - 키릴 문자를 라틴 문자로 음역하는 명령줄 도구

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use translit::config::{load_config, TranslitConfig};
use translit::Transliterator;

const USAGE: &str = "\
사용법: translit [-t|--table NAME] [-l|--list] [-h|--help] [TEXT...]

TEXT가 없으면 표준 입력을 한 줄씩 음역합니다.";

/// 명령줄 인자 파싱 결과
#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// 음역 (테이블 이름, 인자로 받은 텍스트)
    Run {
        table: Option<String>,
        text: Option<String>,
    },
    List,
    Help,
}

fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut table = None;
    let mut words = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-l" | "--list" => return Ok(Command::List),
            "-t" | "--table" => {
                let name = args
                    .next()
                    .ok_or_else(|| format!("{} 뒤에 테이블 이름이 필요합니다", arg))?;
                table = Some(name);
            }
            "--" => {
                words.extend(args.by_ref());
            }
            _ if arg.starts_with("--table=") => {
                table = Some(arg["--table=".len()..].to_string());
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("알 수 없는 옵션: {}", arg));
            }
            _ => words.push(arg),
        }
    }

    let text = if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    };
    Ok(Command::Run { table, text })
}

/// 음역 실행. 반환값은 프로세스 종료 코드
fn run<R: BufRead, W: Write>(
    config: &TranslitConfig,
    table: Option<String>,
    text: Option<String>,
    input: R,
    out: &mut W,
) -> u8 {
    let name = table.unwrap_or_else(|| config.default_table.clone());
    let table = match config.resolve_table(&name) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("translit: {}", e);
            return 2;
        }
    };
    log::debug!("테이블 선택: {}", name);
    let tr = Transliterator::new(&table);

    let result = match text {
        Some(text) => writeln!(out, "{}", tr.transliterate(&text)),
        None => transliterate_lines(&tr, input, out),
    };

    match result.and_then(|_| out.flush()) {
        Ok(()) => 0,
        // 파이프가 먼저 닫힌 경우 (translit ... | head)
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => 0,
        Err(e) => {
            log::error!("입출력 실패: {}", e);
            eprintln!("translit: {}", e);
            1
        }
    }
}

/// 한 줄씩 음역. 줄 끝(\n, \r\n)은 음역하지 않고 그대로 출력
fn transliterate_lines<R: BufRead, W: Write>(
    tr: &Transliterator<'_>,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let body = line
            .strip_suffix('\n')
            .map(|b| b.strip_suffix('\r').unwrap_or(b))
            .unwrap_or(&line);
        let ending = &line[body.len()..];
        write!(out, "{}{}", tr.transliterate(body), ending)?;
    }
}

fn main() -> ExitCode {
    // 로깅 초기화 (warn 이상만 출력, RUST_LOG로 조정)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("translit: {}", e);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match command {
        Command::Help => {
            println!("{}", USAGE);
            ExitCode::SUCCESS
        }
        Command::List => {
            for name in load_config().table_names() {
                println!("{}", name);
            }
            ExitCode::SUCCESS
        }
        Command::Run { table, text } => {
            let stdout = io::stdout();
            let code = run(
                &load_config(),
                table,
                text,
                io::stdin().lock(),
                &mut stdout.lock(),
            );
            ExitCode::from(code)
        }
    }
}
