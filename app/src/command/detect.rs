use lumen_core::DetectionEvent;
use lumen_detect::DetectorKind;
use tracing::info;

/// Input parameters for the Detect command strategy.
#[derive(Debug, Clone)]
pub struct DetectInput {
    /// Text to scan
    pub text: String,
    /// Which stock (or configured) keyword table to use
    pub detector: DetectorKind,
    /// Emit the detection event as JSON instead of text
    pub json: bool,
}

/// Strategy for scanning text with a keyword detector.
///
/// Detection itself is pure; this strategy turns a positive result into a
/// [`DetectionEvent`] and prints it.
#[derive(Debug, Clone, Copy)]
pub struct DetectStrategy;

impl super::CommandStrategy for DetectStrategy {
    type Input = DetectInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_for(input.detector.feature())?;
        let detector = config.build_detector(input.detector);

        let Some(result) = detector.detect(&input.text) else {
            info!("{} detector: no indicators", detector.name());
            if input.json {
                println!("null");
            } else {
                println!("No indicators detected.");
            }
            return Ok(());
        };

        let event = DetectionEvent::new(detector.name(), &input.text, result);

        if input.json {
            println!("{}", serde_json::to_string_pretty(&event)?);
            return Ok(());
        }

        println!("Detector: {}", event.detector);
        println!("Severity: {}", event.result.severity);
        println!(
            "Type: {}",
            event.result.kind.as_deref().unwrap_or("(unclassified)")
        );
        println!("Indicators:");
        for indicator in &event.result.indicators {
            println!("  - {indicator}");
        }

        Ok(())
    }
}
