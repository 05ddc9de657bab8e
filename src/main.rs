use std::time::Duration;

use tokio::io::{AsyncWriteExt, BufWriter, Stdout};

use loadstate::prelude::*;

#[tokio::main]
async fn main() {
    CliApp::new("loadstate")
        .with_args(parse_args)
        .run(run_scenario)
        .await
}

/// Parse and validate command-line arguments
fn parse_args(args: Vec<String>) -> Result<Scenario, AppError> {
    match args.as_slice() {
        [_, scenario] => scenario.parse(),
        _ => {
            let names: Vec<&str> = Scenario::ALL.iter().map(Scenario::name).collect();
            Err(AppError::InvalidArguments(format!(
                "Usage: loadstate <{}>",
                names.join("|")
            )))
        }
    }
}

/// Collects rendered states as printable lines
#[derive(Default)]
struct Transcript {
    lines: Vec<String>,
}

impl ResourceView<String> for Transcript {
    fn on_loading(&mut self) {
        self.lines.push("loading".to_string());
    }

    fn on_success(&mut self, value: &String) {
        self.lines.push(format!("success: {value}"));
    }

    fn on_failure(&mut self, error: ApiError) {
        show_toast(&TracingToaster, &error.message);
        self.lines.push(format!("failure: {} {}", error.code, error.message));
    }
}

/// Run one scripted load and print every state the observer saw
async fn run_scenario(scenario: Scenario, mut out: BufWriter<Stdout>) -> Result<(), AppError> {
    let connectivity = SharedConnectivity::new(scenario.network());
    let pipeline = ResultPipeline::new(connectivity).with_loading(true);
    let sink = WatchSink::new();

    let receiver = sink.subscribe();
    let observer = tokio::spawn(async move {
        let mut transcript = Transcript::default();
        observe(receiver, &DefaultStrings, &mut transcript).await;
        transcript.lines
    });

    let mut attempt = 0;
    let report = pipeline
        .proceed(&sink, || {
            attempt += 1;
            scenario.source(attempt, Duration::from_millis(20))
        })
        .await;

    // Closing the sink ends the observer
    drop(sink);
    let lines = observer.await?;

    for line in lines {
        out.write_all(line.as_bytes()).await?;
        out.write_all(b"\n").await?;
    }
    let summary = format!(
        "attempts={} items={} failed={}\n",
        report.attempts, report.items, report.failed
    );
    out.write_all(summary.as_bytes()).await?;
    out.flush().await?;

    Ok(())
}
