//! Command handlers for the freeformgen CLI.

use anyhow::Context;
use clap::Args;
use freeform_core::FixtureSchema;
use freeform_generator::{
    array, matrix_of_tag, object, scalar_of_tag, value, vector_of_tag, Arg, FixtureGenerator,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Vector command options
#[derive(Args, Debug, Clone)]
pub struct VectorOpts {
    /// Element kind (null, bool, primitive, int, float, string)
    pub kind: String,

    /// Minimum vector length
    pub min_length: i64,

    /// Maximum vector length
    pub max_length: i64,

    /// Kind arguments: `min max` for int/float, `min-len max-len charset` for string.
    /// A charset may start with `-`
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Matrix command options
#[derive(Args, Debug, Clone)]
pub struct MatrixOpts {
    /// Element kind (null, bool, primitive, int, float, string)
    pub kind: String,

    /// Minimum row count
    pub min_rows: i64,

    /// Maximum row count
    pub max_rows: i64,

    /// Minimum row length
    pub min_cols: i64,

    /// Maximum row length
    pub max_cols: i64,

    /// Kind arguments, as for `vector`
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Fixture generation options
#[derive(Args, Debug, Clone)]
pub struct GenerateOpts {
    /// Path to the YAML fixture schema
    #[arg(long, value_name = "PATH")]
    pub schema: PathBuf,

    /// Number of records to generate
    #[arg(long, default_value_t = 1)]
    pub count: u64,

    /// Pretty-print each record
    #[arg(long)]
    pub pretty: bool,
}

/// Build the RNG for a command. Seeded when `seed` is given, otherwise
/// from OS entropy.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Turn raw CLI words into generator arguments. Numbers are parsed lazily
/// by the kind that consumes them.
pub fn parse_args(raw: &[String]) -> Vec<Arg> {
    raw.iter().map(|word| Arg::Text(word.clone())).collect()
}

fn write_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, value).context("Failed to serialize output")?;
    writeln!(out)?;
    Ok(())
}

pub fn run_scalar<R: Rng, W: Write>(
    rng: &mut R,
    kind: &str,
    args: &[String],
    out: &mut W,
) -> anyhow::Result<()> {
    let value = scalar_of_tag(rng, kind, &parse_args(args))
        .with_context(|| format!("Failed to generate {kind} scalar"))?;
    write_line(out, &value)
}

pub fn run_vector<R: Rng, W: Write>(
    rng: &mut R,
    opts: &VectorOpts,
    out: &mut W,
) -> anyhow::Result<()> {
    let value = vector_of_tag(
        rng,
        &opts.kind,
        opts.min_length,
        opts.max_length,
        &parse_args(&opts.args),
    )
    .with_context(|| format!("Failed to generate {} vector", opts.kind))?;
    write_line(out, &value)
}

pub fn run_matrix<R: Rng, W: Write>(
    rng: &mut R,
    opts: &MatrixOpts,
    out: &mut W,
) -> anyhow::Result<()> {
    let value = matrix_of_tag(
        rng,
        &opts.kind,
        opts.min_rows,
        opts.max_rows,
        opts.min_cols,
        opts.max_cols,
        &parse_args(&opts.args),
    )
    .with_context(|| format!("Failed to generate {} matrix", opts.kind))?;
    write_line(out, &value)
}

pub fn run_array<R: Rng, W: Write>(rng: &mut R, length: i64, out: &mut W) -> anyhow::Result<()> {
    write_line(out, &array(rng, length))
}

pub fn run_object<R: Rng, W: Write>(rng: &mut R, length: i64, out: &mut W) -> anyhow::Result<()> {
    write_line(out, &object(rng, length))
}

pub fn run_value<R: Rng, W: Write>(rng: &mut R, out: &mut W) -> anyhow::Result<()> {
    write_line(out, &value(rng))
}

/// Generate records from a schema file, one JSON document per record.
pub fn run_generate<W: Write>(
    opts: &GenerateOpts,
    seed: Option<u64>,
    out: &mut W,
) -> anyhow::Result<()> {
    let schema = FixtureSchema::from_file(&opts.schema)
        .with_context(|| format!("Failed to load fixture schema from {:?}", opts.schema))?;
    tracing::info!(
        fields = schema.fields.len(),
        count = opts.count,
        "Generating fixture records"
    );

    let mut generator = FixtureGenerator::new(schema, seed)?;
    for record in generator.records(opts.count) {
        let record = record?;
        if opts.pretty {
            serde_json::to_writer_pretty(&mut *out, &record)
                .context("Failed to serialize record")?;
            writeln!(out)?;
        } else {
            write_line(out, &record)?;
        }
    }

    tracing::info!(count = opts.count, "Fixture generation complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn lines(buf: &[u8]) -> Vec<Value> {
        std::str::from_utf8(buf)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn words(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_run_scalar() {
        let mut rng = make_rng(Some(42));
        let mut out = Vec::new();
        run_scalar(&mut rng, "int", &words(&["7", "7"]), &mut out).unwrap();
        assert_eq!(lines(&out), vec![serde_json::json!(7)]);
    }

    #[test]
    fn test_run_vector() {
        let mut rng = make_rng(Some(42));
        let mut out = Vec::new();
        let opts = VectorOpts {
            kind: "int".to_string(),
            min_length: 3,
            max_length: 6,
            args: words(&["-3", "0"]),
        };
        run_vector(&mut rng, &opts, &mut out).unwrap();

        let values = lines(&out);
        let items = values[0].as_array().unwrap();
        assert!((3..=6).contains(&items.len()));
        assert!(items
            .iter()
            .all(|v| (-3..=0).contains(&v.as_i64().unwrap())));
    }

    #[test]
    fn test_run_vector_reports_generation_error() {
        let mut rng = make_rng(Some(42));
        let mut out = Vec::new();
        let opts = VectorOpts {
            kind: "foo".to_string(),
            min_length: 1,
            max_length: 2,
            args: vec![],
        };
        let err = run_vector(&mut rng, &opts, &mut out).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Failed to generate foo vector"));
        assert!(message.contains("invalid type"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_matrix() {
        let mut rng = make_rng(Some(42));
        let mut out = Vec::new();
        let opts = MatrixOpts {
            kind: "string".to_string(),
            min_rows: 2,
            max_rows: 2,
            min_cols: 3,
            max_cols: 3,
            args: words(&["1", "4", "abc"]),
        };
        run_matrix(&mut rng, &opts, &mut out).unwrap();

        let values = lines(&out);
        let rows = values[0].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        for row in rows {
            let row = row.as_array().unwrap();
            assert_eq!(row.len(), 3);
            for cell in row {
                let cell = cell.as_str().unwrap();
                assert!((1..=4).contains(&cell.chars().count()));
                assert!(cell.chars().all(|c| "abc".contains(c)));
            }
        }
    }

    #[test]
    fn test_run_array_and_object() {
        let mut rng = make_rng(Some(42));
        let mut out = Vec::new();
        run_array(&mut rng, 4, &mut out).unwrap();
        run_object(&mut rng, 3, &mut out).unwrap();
        run_object(&mut rng, -1, &mut out).unwrap();

        let values = lines(&out);
        assert_eq!(values[0].as_array().unwrap().len(), 4);
        assert_eq!(values[1].as_object().unwrap().len(), 3);
        assert!(values[2].as_object().unwrap().len() < 12);
    }

    #[test]
    fn test_run_generate() {
        let yaml = r#"
version: 1
fields:
  - name: id
    generator:
      type: scalar
      element:
        type: int
        min: 1
        max: 100
  - name: tags
    generator:
      type: vector_of
      min_length: 2
      max_length: 2
      element:
        type: string
        min_length: 3
        max_length: 3
        charset: "xyz"
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let opts = GenerateOpts {
            schema: file.path().to_path_buf(),
            count: 3,
            pretty: false,
        };
        let mut out = Vec::new();
        run_generate(&opts, Some(42), &mut out).unwrap();

        let records = lines(&out);
        assert_eq!(records.len(), 3);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record["index"], serde_json::json!(i));
            let id = record["fields"]["id"].as_i64().unwrap();
            assert!((1..=100).contains(&id));
            assert_eq!(record["fields"]["tags"].as_array().unwrap().len(), 2);
        }

        // Same seed, same output.
        let mut again = Vec::new();
        run_generate(&opts, Some(42), &mut again).unwrap();
        assert_eq!(out, again);
    }

    #[test]
    fn test_run_generate_missing_schema() {
        let opts = GenerateOpts {
            schema: PathBuf::from("/nonexistent/fixtures.yaml"),
            count: 1,
            pretty: false,
        };
        let mut out = Vec::new();
        let err = run_generate(&opts, None, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load fixture schema"));
    }
}
