// 総当たりパスワードクラッカー - メニューCLI
//
// ここは入出力の糊層。正しさはアプリケーション層以下が担う。

use anyhow::{Context, Result};
use num_bigint::BigUint;
use std::io::{self, Write};

use brutepass::application::attack::SearchEvent;
use brutepass::application::benchmark::{measure_throughput, DEFAULT_BENCH_DURATION};
use brutepass::application::estimate::{estimate_search_size, format_duration, format_thousands};
use brutepass::constants::BENCHMARK_LENGTH;
use brutepass::domain::charset::CharsetRegistry;
use brutepass::domain::search::{Alphabet, LengthRange, SearchSpec};
use brutepass::infrastructure::executor::ParallelConfig;
use brutepass::logging::{init_log_file, set_verbose, DEFAULT_LOG_PATH};
use brutepass::AttackService;

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush().context("標準出力のフラッシュに失敗しました")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("入力の読み取りに失敗しました")?;
    Ok(line.trim().to_string())
}

fn prompt_usize(message: &str) -> Result<usize> {
    prompt(message)?
        .parse::<usize>()
        .context("数値を入力してください")
}

/// レジストリから文字セットを選ぶ（不正入力は既定の全印字可能ASCII）
fn select_charset(registry: &CharsetRegistry) -> String {
    println!("\n文字セットを選択:");
    for (i, entry) in registry.entries().iter().enumerate() {
        println!("{}. {} ({}文字)", i + 1, entry.name, entry.symbols.chars().count());
    }
    match prompt("番号: ").ok().and_then(|s| s.parse::<usize>().ok()) {
        Some(i) => match registry.by_index(i) {
            Some(entry) => entry.symbols.clone(),
            None => {
                println!("不正な選択です。既定の文字セットを使用します。");
                registry.default_symbols().to_string()
            }
        },
        None => {
            println!("不正な選択です。既定の文字セットを使用します。");
            registry.default_symbols().to_string()
        }
    }
}

fn run_attack_flow(registry: &CharsetRegistry) -> Result<()> {
    let target = prompt("解読対象のパスワード: ")?;
    let min_length = prompt_usize("最小パスワード長: ")?;
    let max_length = prompt_usize("最大パスワード長: ")?;
    let lengths = match LengthRange::new(min_length, max_length) {
        Ok(r) => r,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let symbols = select_charset(registry);
    let alphabet = Alphabet::new(&symbols)?;
    if !alphabet.contains_all(&target) {
        println!("注意: 対象に選択した文字セット外の記号が含まれています。この探索では見つかりません。");
    }

    // スループット計測（攻撃と同一コストモデル）
    println!("\nシステム性能を計測中...");
    let bench_length = BENCHMARK_LENGTH.min(lengths.max());
    let gps = measure_throughput(&alphabet, bench_length, DEFAULT_BENCH_DURATION)?;
    println!("推定速度: {}候補/秒", format_thousands(&BigUint::from(gps)));

    let estimate = estimate_search_size(&alphabet, &lengths, gps)?;
    println!("\n推定所要時間: {}", estimate.estimated_duration);
    println!(
        "組み合わせ総数: {} ({})",
        estimate.total_display, estimate.total_scientific
    );

    let proceed = prompt("実行しますか? (yes/no): ")?;
    if !proceed.eq_ignore_ascii_case("yes") {
        println!("\nメインメニューに戻ります...");
        return Ok(());
    }

    println!("\n総当たり攻撃を開始します...\n");
    let spec = SearchSpec::new(&target, alphabet, lengths)?;
    let mut service = AttackService::new();
    let handle = service.start_attack(spec, ParallelConfig::default())?;

    let events = handle.events().clone();
    for event in events.iter() {
        match event {
            SearchEvent::Log(msg) => println!("[log] {}", msg),
            SearchEvent::Progress(p) => {
                println!(
                    "長さ{}を探索中: 照合済み={} / 速度={:.0}候補/秒",
                    p.current_length,
                    format_thousands(&BigUint::from(p.attempts)),
                    p.rate
                );
            }
            SearchEvent::Aborted => println!("探索を中断しました。"),
            SearchEvent::Error(msg) => println!("エラー: {}", msg),
            SearchEvent::Finished(_) => break,
        }
    }

    let result = handle.wait()?;
    if let Some(candidate) = &result.candidate {
        println!(
            "\n{}回の照合でパスワードを解読しました!",
            format_thousands(&BigUint::from(result.attempts))
        );
        println!("パスワード: {}", candidate);
        println!("所要時間: {}", format_duration(result.elapsed.as_secs_f64()));
    } else {
        println!("\nパスワードを解読できませんでした。");
        println!(
            "照合済み候補数: {}",
            format_thousands(&BigUint::from(result.attempts))
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    if init_log_file(DEFAULT_LOG_PATH).is_ok() {
        set_verbose(true);
    }

    println!("総当たりパスワードクラッカー (CPU並列版)");
    println!("=========================================");

    let registry = CharsetRegistry::new();

    loop {
        println!("\nメニュー:");
        println!("1. 総当たり攻撃を開始");
        println!("2. 終了");
        let choice = prompt("選択: ")?;

        match choice.as_str() {
            "1" => {
                if let Err(e) = run_attack_flow(&registry) {
                    println!("エラー: {:#}", e);
                }
            }
            "2" => {
                println!("終了します...");
                break;
            }
            _ => println!("不正な選択です。もう一度入力してください。"),
        }
    }
    Ok(())
}
