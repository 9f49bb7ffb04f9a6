use crate::config::job_config::JobConfig;
use crate::core::{JobReport, Processor, TransformOutcome};
use crate::utils::error::Result;

/// Runs a [`JobConfig`] against a processor.
///
/// In lenient mode (the default) rejections are counted and the job carries
/// on, the way the compatibility surface behaves. In strict mode the first
/// rejection aborts the job with its error.
pub struct JobRunner<P: Processor> {
    processor: P,
    strict: bool,
}

impl<P: Processor> JobRunner<P> {
    pub fn new(processor: P) -> Self {
        Self {
            processor,
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    pub fn into_inner(self) -> P {
        self.processor
    }

    pub fn run(&mut self, job: &JobConfig) -> Result<JobReport> {
        tracing::info!("Starting job '{}'", job.name());

        let mut transforms = Vec::with_capacity(job.transforms.len());
        for step in &job.transforms {
            let outcome = match self.processor.try_transform(step.input, &step.mode) {
                Ok(result) => TransformOutcome {
                    input: step.input,
                    mode: step.mode.clone(),
                    result,
                    applied: true,
                },
                Err(e) if self.strict => return Err(e),
                Err(e) => {
                    tracing::debug!("transform({}, {}) not applied: {}", step.input, step.mode, e);
                    TransformOutcome {
                        input: step.input,
                        mode: step.mode.clone(),
                        result: 0,
                        applied: false,
                    }
                }
            };
            transforms.push(outcome);
        }
        tracing::info!("Transformed {} inputs", transforms.len());

        let validation = match job.validate_values() {
            Some(values) => match self.processor.check(values) {
                Ok(()) => Some(true),
                Err(e) if self.strict => return Err(e),
                Err(e) => {
                    tracing::info!("Validation failed: {}", e);
                    Some(false)
                }
            },
            None => None,
        };

        let mut appended = 0;
        let mut rejected = 0;
        for &value in job.append_values() {
            match self.processor.try_append(value) {
                Ok(()) => appended += 1,
                Err(e) if self.strict => return Err(e),
                Err(e) => {
                    tracing::debug!("append({}) rejected: {}", value, e);
                    rejected += 1;
                }
            }
        }
        tracing::info!("Appended {} values, rejected {}", appended, rejected);

        Ok(JobReport {
            name: job.name().to_string(),
            transforms,
            validation,
            appended,
            rejected,
            store: self.processor.snapshot(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::DataProcessor;
    use crate::utils::error::ProcessError;

    fn sample_job() -> JobConfig {
        JobConfig::from_toml_str(
            r#"
[job]
name = "sample"

[[transform]]
input = 12
mode = "double"

[[transform]]
input = 60
mode = "triple"

[validate]
values = [1, -2, 3]

[append]
values = [5, 0, 7, 10000]
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_lenient_run_collects_rejections() {
        let mut runner = JobRunner::new(DataProcessor::new());
        let report = runner.run(&sample_job()).unwrap();

        assert_eq!(report.name, "sample");
        assert_eq!(report.transforms[0].result, 29);
        assert!(report.transforms[0].applied);
        assert_eq!(report.transforms[1].result, 0);
        assert!(!report.transforms[1].applied);
        assert_eq!(report.validation, Some(false));
        assert_eq!(report.appended, 2);
        assert_eq!(report.rejected, 2);
        assert_eq!(report.store.values, vec![5, 7]);
    }

    #[test]
    fn test_strict_run_stops_at_first_rejection() {
        let mut runner = JobRunner::new(DataProcessor::new()).strict(true);
        let err = runner.run(&sample_job()).unwrap_err();

        assert!(matches!(err, ProcessError::OutOfRange { input: 60, .. }));
        assert!(runner.processor().is_empty());
    }

    #[test]
    fn test_store_persists_across_runs() {
        let job = JobConfig::from_toml_str(
            r#"
[job]
name = "fill"

[append]
values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
"#,
        )
        .unwrap();

        let mut runner = JobRunner::new(DataProcessor::new());
        for _ in 0..10 {
            runner.run(&job).unwrap();
        }
        let report = runner.run(&job).unwrap();

        assert_eq!(report.appended, 0);
        assert_eq!(report.rejected, 10);
        assert_eq!(runner.into_inner().len(), 100);
    }

    #[test]
    fn test_validation_omitted_when_not_requested() {
        let job = JobConfig::from_toml_str("[job]\nname = \"empty\"\n").unwrap();
        let report = JobRunner::new(DataProcessor::new()).run(&job).unwrap();

        assert_eq!(report.validation, None);
        assert!(report.transforms.is_empty());
        assert_eq!(report.store.len, 0);
    }
}
