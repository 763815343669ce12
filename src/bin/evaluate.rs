use anyhow::{Context, Result};
use clap::{Arg, Command};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use linear_classifiers::config::{LearningSchedule, ModelConfig, ModelType};
use linear_classifiers::data_handling::{split_train_test, Sample};
use linear_classifiers::io::delimited::{read_labeled_records, LabeledRecord, ReaderConfig};
use linear_classifiers::models::adaline::Adaline;
use linear_classifiers::models::classifier_trait::LinearModel;
use linear_classifiers::models::perceptron::Perceptron;
use linear_classifiers::multiclass::OneVsAllClassifier;
use linear_classifiers::stats::misclassification_rate;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Info)
        .parse_env(env_logger::Env::default().filter_or("LINEAR_LOG", "info"))
        .init();

    let matches = Command::new("evaluate")
        .version(clap::crate_version!())
        .about("Train a one-vs-all linear classifier and report its misclassification rate")
        .arg(
            Arg::new("data")
                .help("Path to the delimited sample file (numeric fields plus one label field per row)")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .default_value("perceptron")
                .help("Model variant: perceptron or adaline"),
        )
        .arg(
            Arg::new("learning_rate")
                .short('r')
                .long("learning-rate")
                .value_parser(clap::value_parser!(f32))
                .default_value("0.01")
                .help("Base per-update learning rate"),
        )
        .arg(
            Arg::new("epochs")
                .short('e')
                .long("epochs")
                .value_parser(clap::value_parser!(usize))
                .help("Number of full passes over the training set. Overrides the variant default."),
        )
        .arg(
            Arg::new("train_fraction")
                .short('f')
                .long("train-fraction")
                .value_parser(clap::value_parser!(f32))
                .default_value("0.3333")
                .help("Fraction of the shuffled dataset used for training"),
        )
        .arg(
            Arg::new("delimiter")
                .short('d')
                .long("delimiter")
                .default_value(",")
                .help("Field delimiter of the sample file"),
        )
        .get_matches();

    let data_path = matches.get_one::<PathBuf>("data").unwrap();
    let learning_rate = *matches.get_one::<f32>("learning_rate").unwrap();
    let train_fraction = *matches.get_one::<f32>("train_fraction").unwrap();

    let mut model_type = ModelType::from_str(matches.get_one::<String>("model").unwrap())
        .map_err(anyhow::Error::msg)?;
    if let Some(&override_epochs) = matches.get_one::<usize>("epochs") {
        match &mut model_type {
            ModelType::Perceptron { epochs } | ModelType::Adaline { epochs } => {
                *epochs = override_epochs
            }
        }
    }

    let delimiter = matches.get_one::<String>("delimiter").unwrap();
    anyhow::ensure!(
        delimiter.len() == 1,
        "Delimiter must be a single byte, got '{}'",
        delimiter
    );
    let reader_config = ReaderConfig {
        delimiter: delimiter.as_bytes()[0],
        has_headers: false,
    };

    let records = read_labeled_records(data_path, &reader_config)?;
    log::info!(
        "Loaded {} records from {}",
        records.len(),
        data_path.display()
    );

    let config = ModelConfig {
        learning_rate,
        schedule: LearningSchedule::Constant,
        model_type: model_type.clone(),
    };

    let rate = match model_type {
        ModelType::Perceptron { .. } => evaluate::<Perceptron>(config, records, train_fraction)?,
        ModelType::Adaline { .. } => evaluate::<Adaline>(config, records, train_fraction)?,
    };

    println!("Misclassification rate: {}", rate);
    Ok(())
}

/// Register labels, split, train, and score the held-out partition.
fn evaluate<M>(config: ModelConfig, records: Vec<LabeledRecord>, train_fraction: f32) -> Result<f32>
where
    M: LinearModel + Send,
{
    let mut classifier = OneVsAllClassifier::<M>::new(config);

    let samples: Vec<Sample> = records
        .into_iter()
        .map(|record| {
            let id = classifier.get_id(&record.label);
            Sample::new(record.factors, id as i32)
        })
        .collect();
    log::info!("Registered {} distinct classes", classifier.num_classes());

    let (training_set, test_set) = split_train_test(samples, train_fraction);
    log::info!(
        "Split into {} training and {} test samples",
        training_set.len(),
        test_set.len()
    );

    classifier
        .fit(&training_set)
        .context("Multi-class training failed")?;

    let predictions = test_set
        .iter()
        .map(|sample| classifier.predict_class(sample))
        .collect::<linear_classifiers::error::Result<Vec<usize>>>()
        .context("Prediction over the test partition failed")?;
    let labels: Vec<i32> = test_set.iter().map(|sample| sample.label).collect();

    misclassification_rate(&predictions, &labels)
        .context("Test partition is empty; nothing to evaluate")
}
