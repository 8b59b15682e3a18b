// src/bin/activity-chart/main.rs
use activity_chart::{RunConfig, generate_with_config};
use activity_chart_cli::{
    ChartOpts, cli_command, handle_clap_error, report_error, version_banner,
};
use chart::OutputSink;

fn main() {
    let args: Vec<_> = std::env::args_os().collect();
    if activity_chart_cli::print_version_if_requested(args.iter().cloned()) {
        return;
    }
    let mut cmd = cli_command();
    let matches = cmd
        .try_get_matches_from_mut(&args)
        .unwrap_or_else(|e| handle_clap_error(&cmd, e));
    let opts = ChartOpts::from_matches(&matches).unwrap_or_else(|e| handle_clap_error(&cmd, e));
    // `-V` bundled with other short flags, e.g. `-vV`
    if opts.version {
        if !opts.quiet {
            print!("{}", version_banner());
        }
        return;
    }

    let cfg = RunConfig::builder()
        .chart(opts.chart_config())
        .logging(&opts.subscriber_config())
        .build();

    match generate_with_config(&cfg) {
        Ok(OutputSink::File(path)) => {
            if !cfg.quiet {
                println!(
                    "Markdown chart successfully written to '{}'",
                    path.display()
                );
            }
        }
        Ok(OutputSink::Console) => {}
        Err(e) => {
            report_error(&e);
            std::process::exit(i32::from(e.exit_code()));
        }
    }
}

