use std::collections::BTreeMap;

use anyhow::bail;

use super::JobChain;
use super::catalog::{DatasetEntry, ModelEntry};

pub struct GenerateOptions {
    pub chain_name: String,
    pub resource_pool_id: String,
    /// Root for derived outputs: converted checkpoints, tokenized data and
    /// the training save directory all land under it.
    pub output_root: String,
}

/// Instantiate a chain template for one model/dataset pair: every stage name
/// and command has its `${...}` placeholders resolved, completion state is
/// reset, and the chain is pointed at the target resource pool.
pub fn generate_chain(
    mut template: JobChain,
    model: &ModelEntry,
    dataset: &DatasetEntry,
    options: &GenerateOptions,
) -> anyhow::Result<JobChain> {
    let vars = build_vars(model, dataset, options);

    template.name = options.chain_name.clone();
    template.resource_pool_id = options.resource_pool_id.clone();
    for stage in &mut template.stages {
        stage.name = inject(&stage.name, &vars)?;
        stage.command = inject(&stage.command, &vars)?;
        stage.completed = false;
        stage.job_id = None;
    }
    Ok(template)
}

fn build_vars(
    model: &ModelEntry,
    dataset: &DatasetEntry,
    options: &GenerateOptions,
) -> BTreeMap<String, String> {
    let output_root = options.output_root.trim_end_matches('/');

    // Datasets without a preprocessed prefix get one derived under the
    // output root; the preprocessing stage writes there and training reads
    // from the same place.
    let tokenized_prefix = if dataset.processed_prefix.is_empty() {
        format!("{}/data/{}_tokenized", output_root, dataset.name)
    } else {
        dataset.processed_prefix.clone()
    };
    let converted_checkpoint = format!(
        "{}/checkpoints/{}-tp{}-pp{}",
        output_root, model.name, model.tensor_parallel, model.pipeline_parallel
    );

    let mut vars = BTreeMap::new();
    vars.insert("CHAIN_NAME".to_string(), options.chain_name.clone());
    vars.insert("MODEL_NAME".to_string(), model.name.clone());
    vars.insert("PARAM_SCALE".to_string(), model.param_scale.clone());
    vars.insert("CHECKPOINT_PATH".to_string(), model.checkpoint_path.clone());
    vars.insert("TOKENIZER_PATH".to_string(), model.tokenizer_path.clone());
    vars.insert(
        "TENSOR_PARALLEL".to_string(),
        model.tensor_parallel.to_string(),
    );
    vars.insert(
        "PIPELINE_PARALLEL".to_string(),
        model.pipeline_parallel.to_string(),
    );
    vars.insert("DATASET_NAME".to_string(), dataset.name.clone());
    vars.insert("RAW_DATASET_PATH".to_string(), dataset.raw_path.clone());
    vars.insert("TOKENIZED_DATA_PREFIX".to_string(), tokenized_prefix);
    vars.insert("CONVERTED_CHECKPOINT_PATH".to_string(), converted_checkpoint);
    vars.insert("OUTPUT_ROOT".to_string(), output_root.to_string());
    vars
}

/// Resolve every `${NAME}` in `template` from `vars`. An unknown name or an
/// unterminated placeholder is an error, not a silent pass-through.
fn inject(template: &str, vars: &BTreeMap<String, String>) -> anyhow::Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            bail!("unterminated placeholder in {:?}", template);
        };
        let key = &after[..end];
        match vars.get(key) {
            Some(value) => out.push_str(value),
            None => bail!("unresolved placeholder ${{{key}}}"),
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ModelEntry {
        ModelEntry {
            name: "llama2-7b".to_string(),
            param_scale: "7b".to_string(),
            checkpoint_path: "/mnt/models/llama2-7b-hf".to_string(),
            tokenizer_path: "/mnt/models/llama2-7b-hf".to_string(),
            tensor_parallel: 2,
            pipeline_parallel: 1,
        }
    }

    fn dataset(processed_prefix: &str) -> DatasetEntry {
        DatasetEntry {
            name: "pile-sample".to_string(),
            raw_path: "/mnt/data/pile.jsonl".to_string(),
            processed_prefix: processed_prefix.to_string(),
        }
    }

    fn options() -> GenerateOptions {
        GenerateOptions {
            chain_name: "llama2-7b-pile".to_string(),
            resource_pool_id: "cce-abcd1234".to_string(),
            output_root: "/mnt/cluster/".to_string(),
        }
    }

    #[test]
    fn inject_resolves_and_rejects() {
        let vars = BTreeMap::from([("NAME".to_string(), "llama".to_string())]);
        assert_eq!(inject("run ${NAME} now", &vars).unwrap(), "run llama now");
        assert_eq!(inject("no placeholders", &vars).unwrap(), "no placeholders");

        let err = inject("${MISSING}", &vars).unwrap_err().to_string();
        assert!(err.contains("unresolved placeholder ${MISSING}"));
        assert!(inject("${NAME", &vars).is_err());
    }

    #[test]
    fn derived_paths_come_from_the_catalog_row() {
        let vars = build_vars(&model(), &dataset(""), &options());
        assert_eq!(
            vars["CONVERTED_CHECKPOINT_PATH"],
            "/mnt/cluster/checkpoints/llama2-7b-tp2-pp1"
        );
        assert_eq!(
            vars["TOKENIZED_DATA_PREFIX"],
            "/mnt/cluster/data/pile-sample_tokenized"
        );

        // An explicit prefix in the catalog wins over the derived one.
        let vars = build_vars(&model(), &dataset("/mnt/data/pile_tok"), &options());
        assert_eq!(vars["TOKENIZED_DATA_PREFIX"], "/mnt/data/pile_tok");
    }

    #[test]
    fn generated_chain_has_no_placeholders_left() {
        let chain =
            generate_chain(JobChain::aiak_template(), &model(), &dataset(""), &options()).unwrap();

        assert_eq!(chain.name, "llama2-7b-pile");
        assert_eq!(chain.resource_pool_id, "cce-abcd1234");
        assert_eq!(chain.stages.len(), 3);
        for stage in &chain.stages {
            assert!(!stage.name.contains("${"), "unresolved name: {}", stage.name);
            assert!(
                !stage.command.contains("${"),
                "unresolved command: {}",
                stage.command
            );
            assert!(!stage.completed);
        }
        assert!(chain.stages[0].command.contains("--tensor_model_parallel_size=2"));
        assert!(chain.stages[2].command.contains("pretrain_7b.sh"));
    }

    #[test]
    fn templates_with_unknown_placeholders_fail_generation() {
        let mut template = JobChain::aiak_template();
        template.stages[0].command = "echo ${NOT_A_VAR}".to_string();
        let err = generate_chain(template, &model(), &dataset(""), &options())
            .unwrap_err()
            .to_string();
        assert!(err.contains("${NOT_A_VAR}"));
    }
}
