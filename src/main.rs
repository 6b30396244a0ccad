use splitex::{evaluate, exerr, ExResult};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

const N_DECIMALS: usize = 5;

fn eval_line(line: &str) -> ExResult<f64> {
    let line = line.trim();
    if line.is_empty() {
        return exerr!("No expression on the input");
    }
    evaluate(line)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let mut buffer = String::new();
    let mut stdout = io::stdout();
    let mut stdin = io::stdin().lock();
    loop {
        stdout.write_all("> ".as_bytes())?;
        stdout.flush()?;
        buffer.clear();
        if stdin.read_line(&mut buffer)? == 0 {
            break;
        }
        match eval_line(&buffer) {
            Ok(x) => println!("{x:.prec$}", prec = N_DECIMALS),
            Err(e) => println!("Error: {}", e.msg),
        }
    }
    Ok(())
}
