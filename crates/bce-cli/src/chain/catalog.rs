//! CSV catalogs the generator resolves model and dataset names against.
//! Parsing is line-based with quoted-field support; a `name,...` header row
//! is skipped.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context as _, bail};

#[derive(Debug, Clone)]
pub struct ModelEntry {
    pub name: String,
    /// Parameter scale the training recipes are keyed by, e.g. `7b`.
    pub param_scale: String,
    /// HuggingFace checkpoint directory.
    pub checkpoint_path: String,
    pub tokenizer_path: String,
    pub tensor_parallel: u32,
    pub pipeline_parallel: u32,
}

#[derive(Debug, Clone)]
pub struct DatasetEntry {
    pub name: String,
    pub raw_path: String,
    /// Prefix of the tokenized output; empty means "derive one".
    pub processed_prefix: String,
}

#[derive(Debug)]
pub struct ModelCatalog {
    entries: BTreeMap<String, ModelEntry>,
}

impl ModelCatalog {
    /// `name,param_scale,checkpoint_path,tokenizer_path,tp,pp` per line.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut entries = BTreeMap::new();
        for (lineno, fields) in read_rows(path)? {
            if fields.len() != 6 {
                bail!(
                    "{}:{}: expected 6 fields, got {}",
                    path.display(),
                    lineno,
                    fields.len()
                );
            }
            let entry = ModelEntry {
                name: fields[0].clone(),
                param_scale: fields[1].clone(),
                checkpoint_path: fields[2].clone(),
                tokenizer_path: fields[3].clone(),
                tensor_parallel: parse_degree(path, lineno, &fields[4])?,
                pipeline_parallel: parse_degree(path, lineno, &fields[5])?,
            };
            entries.insert(entry.name.clone(), entry);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> anyhow::Result<&ModelEntry> {
        match self.entries.get(name) {
            Some(entry) => Ok(entry),
            None => bail!(
                "unknown model {:?}; the catalog holds: {}",
                name,
                names(self.entries.keys())
            ),
        }
    }
}

pub struct DatasetCatalog {
    entries: BTreeMap<String, DatasetEntry>,
}

impl DatasetCatalog {
    /// `name,raw_path,processed_prefix` per line.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut entries = BTreeMap::new();
        for (lineno, fields) in read_rows(path)? {
            if fields.len() != 3 {
                bail!(
                    "{}:{}: expected 3 fields, got {}",
                    path.display(),
                    lineno,
                    fields.len()
                );
            }
            let entry = DatasetEntry {
                name: fields[0].clone(),
                raw_path: fields[1].clone(),
                processed_prefix: fields[2].clone(),
            };
            entries.insert(entry.name.clone(), entry);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> anyhow::Result<&DatasetEntry> {
        match self.entries.get(name) {
            Some(entry) => Ok(entry),
            None => bail!(
                "unknown dataset {:?}; the catalog holds: {}",
                name,
                names(self.entries.keys())
            ),
        }
    }
}

fn names<'a>(keys: impl Iterator<Item = &'a String>) -> String {
    keys.map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn read_rows(path: &Path) -> anyhow::Result<Vec<(usize, Vec<String>)>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let mut rows = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if index == 0 && line.starts_with("name,") {
            continue;
        }
        rows.push((index + 1, split_csv_line(line)));
    }
    Ok(rows)
}

fn parse_degree(path: &Path, lineno: usize, field: &str) -> anyhow::Result<u32> {
    field.trim().parse().with_context(|| {
        format!(
            "{}:{}: not a parallelism degree: {:?}",
            path.display(),
            lineno,
            field
        )
    })
}

/// Split one CSV line. Double quotes wrap fields containing commas; a doubled
/// quote inside a quoted field is a literal quote.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn split_handles_quoted_fields() {
        assert_eq!(split_csv_line("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(
            split_csv_line(r#"llama2-7b,"path,with,commas",x"#),
            vec!["llama2-7b", "path,with,commas", "x"]
        );
        assert_eq!(split_csv_line(r#""say ""hi""",y"#), vec![r#"say "hi""#, "y"]);
        assert_eq!(split_csv_line("a,,c"), vec!["a", "", "c"]);
    }

    #[test]
    fn model_catalog_loads_and_looks_up() {
        let file = write_file(
            "name,param_scale,checkpoint_path,tokenizer_path,tp,pp\n\
             llama2-7b,7b,/mnt/models/llama2-7b-hf,/mnt/models/llama2-7b-hf,1,1\n\
             qwen2-72b,72b,/mnt/models/qwen2-72b-hf,/mnt/models/qwen2-72b-hf,8,4\n",
        );
        let catalog = ModelCatalog::load(file.path()).unwrap();

        let model = catalog.get("qwen2-72b").unwrap();
        assert_eq!(model.param_scale, "72b");
        assert_eq!(model.tensor_parallel, 8);
        assert_eq!(model.pipeline_parallel, 4);
    }

    #[test]
    fn unknown_names_list_what_the_catalog_holds() {
        let file = write_file("llama2-7b,7b,/a,/b,1,1\n");
        let catalog = ModelCatalog::load(file.path()).unwrap();

        let err = catalog.get("gpt-5").unwrap_err().to_string();
        assert!(err.contains("unknown model"));
        assert!(err.contains("llama2-7b"));
    }

    #[test]
    fn bad_field_counts_name_the_line() {
        let file = write_file("llama2-7b,7b,/a,/b,1\n");
        let err = ModelCatalog::load(file.path()).unwrap_err().to_string();
        assert!(err.contains(":1:"));
        assert!(err.contains("expected 6 fields, got 5"));
    }

    #[test]
    fn dataset_catalog_allows_empty_processed_prefix() {
        let file = write_file(
            "name,raw_path,processed_prefix\n\
             pile-sample,/mnt/data/pile.jsonl,\n\
             wudao,/mnt/data/wudao.jsonl,/mnt/data/wudao_tokenized\n",
        );
        let catalog = DatasetCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.get("pile-sample").unwrap().processed_prefix, "");
        assert_eq!(
            catalog.get("wudao").unwrap().processed_prefix,
            "/mnt/data/wudao_tokenized"
        );
    }

    #[test]
    fn degrees_must_be_numbers() {
        let file = write_file("llama2-7b,7b,/a,/b,one,1\n");
        let err = ModelCatalog::load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("not a parallelism degree"));
    }
}
