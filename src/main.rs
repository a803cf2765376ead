use feature_core::ResultCode;
use featureflow::config::RunnerConfig;
use featureflow::demo::run_demo;

fn main() {
    let config = RunnerConfig::from_env();
    println!("featureflow demo (parallel={}, dry_run={})", config.parallel, config.dry_run);

    let (report, recorder) = match run_demo(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[featureflow] {e}");
            std::process::exit(2);
        }
    };

    for feature in &report.features {
        let hooks = feature.result.hook_outcomes();
        println!("{:<12} {:<10} scenarios={} hooks={} hook_failures={}",
                 feature.title,
                 feature.result.result_code().to_string(),
                 feature.result.scenarios().len(),
                 hooks.len(),
                 hooks.failures().count());
        for failure in hooks.failures() {
            if let Some(error) = failure.error() {
                println!("    {}: {}", failure.call(), error);
            }
        }
    }
    println!("events recorded: {}", recorder.list().len());
    for code in [ResultCode::Passed, ResultCode::Skipped, ResultCode::Undefined, ResultCode::Failed] {
        println!("{code}: {}", report.count(code));
    }

    if !report.is_passed() {
        std::process::exit(1);
    }
}
