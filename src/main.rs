mod config;
mod error;
mod lookup;
mod page;
mod render;
mod yodaodict;

#[cfg(test)]
mod fixtures;

use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::error::DictError;
use crate::lookup::{lookup, LookupOptions, Outcome};
use crate::render::Renderer;
use crate::yodaodict::HttpFetcher;

#[derive(Parser)]
#[command(name = "ydict", version)]
#[command(about = "命令行翻译工具，查询有道词典")]
#[command(after_help = "示例:\n  ydict hello       # 翻译单词hello\n  ydict 你好 -a     # 翻译\"你好\"并显示详细信息")]
struct Cli {
    /// 要翻译的内容(英文或中文)
    query: String,

    /// 显示详细翻译信息(包括网络短语和双语例句)
    #[arg(short, long)]
    all: bool,

    /// 打印请求地址和调试日志
    #[arg(short, long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(&cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("{}", style(&e).red());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<Outcome, DictError> {
    let config = Config::from_env();
    let fetcher = HttpFetcher::new(&config)?;

    if cli.debug {
        let url = fetcher.query_url(&cli.query);
        eprintln!("url: {}", style(url).underlined());
    }

    let options = LookupOptions { extended: cli.all };
    let mut renderer = Renderer::stdout();
    lookup(&fetcher, &cli.query, options, &mut renderer)
}
