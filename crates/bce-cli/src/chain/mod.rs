//! The AIAK job chain: a three-stage pipeline document (checkpoint
//! conversion, data preprocessing, training) whose stage commands carry
//! `${...}` placeholders until generation resolves them from the model and
//! dataset catalogs. A submitted stage ends by rewriting the chain file with
//! itself marked completed and re-invoking `bce chain next`, so the pipeline
//! advances without anyone watching it.

pub mod catalog;
mod generate;

pub use generate::{GenerateOptions, generate_chain};

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use bce_client::api::aihc::schemas::{CreateAiJobRequest, ResourceQuantity};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum StageKind {
    #[serde(rename = "checkpoint-conversion")]
    #[strum(serialize = "checkpoint-conversion")]
    CheckpointConversion,
    #[serde(rename = "data-preprocessing")]
    #[strum(serialize = "data-preprocessing")]
    DataPreprocessing,
    #[serde(rename = "training")]
    #[strum(serialize = "training")]
    Training,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainStage {
    pub name: String,
    pub stage: StageKind,
    pub image: String,
    pub command: String,
    pub replicas: u32,
    pub resources: Vec<ResourceQuantity>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobChain {
    pub name: String,
    pub resource_pool_id: String,
    pub stages: Vec<ChainStage>,
}

impl JobChain {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading chain file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing chain file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing chain file {}", path.display()))
    }

    /// Index of the next stage to submit.
    pub fn first_pending(&self) -> Option<usize> {
        self.stages.iter().position(|stage| !stage.completed)
    }

    /// The built-in AIAK pretrain pipeline. Every `${...}` placeholder is
    /// resolved at generation time; see [`generate_chain`].
    pub fn aiak_template() -> Self {
        const IMAGE: &str = "registry.baidubce.com/aihc-aiak/aiak-training-llm:latest";
        let gpu = |quantity| ResourceQuantity {
            name: "baidu.com/a800_80g_cgpu".to_string(),
            quantity,
        };

        JobChain {
            name: "${CHAIN_NAME}".to_string(),
            resource_pool_id: String::new(),
            stages: vec![
                ChainStage {
                    name: "${CHAIN_NAME}-convert".to_string(),
                    stage: StageKind::CheckpointConversion,
                    image: IMAGE.to_string(),
                    command: "cd /workspace/AIAK-Training-LLM && \
                              python tools/convert_checkpoint/model.py \
                              --load_platform=huggingface --save_platform=mcore \
                              --common_config_path=configs/${MODEL_NAME}.json \
                              --tensor_model_parallel_size=${TENSOR_PARALLEL} \
                              --pipeline_model_parallel_size=${PIPELINE_PARALLEL} \
                              --load_ckpt_path=${CHECKPOINT_PATH} \
                              --save_ckpt_path=${CONVERTED_CHECKPOINT_PATH}"
                        .to_string(),
                    replicas: 1,
                    resources: vec![gpu(1)],
                    completed: false,
                    job_id: None,
                },
                ChainStage {
                    name: "${CHAIN_NAME}-preprocess".to_string(),
                    stage: StageKind::DataPreprocessing,
                    image: IMAGE.to_string(),
                    command: "cd /workspace/AIAK-Training-LLM && \
                              python tools/data_preprocess/preprocess_pretrain_data.py \
                              --input ${RAW_DATASET_PATH} \
                              --output-prefix ${TOKENIZED_DATA_PREFIX} \
                              --tokenizer-type HFTokenizer \
                              --hf-tokenizer-path ${TOKENIZER_PATH} \
                              --workers 32"
                        .to_string(),
                    replicas: 1,
                    resources: vec![gpu(1)],
                    completed: false,
                    job_id: None,
                },
                ChainStage {
                    name: "${CHAIN_NAME}-train".to_string(),
                    stage: StageKind::Training,
                    image: IMAGE.to_string(),
                    command: "cd /workspace/AIAK-Training-LLM && \
                              bash examples/${MODEL_NAME}/pretrain_${PARAM_SCALE}.sh \
                              --data-path ${TOKENIZED_DATA_PREFIX} \
                              --tokenizer-path ${TOKENIZER_PATH} \
                              --load ${CONVERTED_CHECKPOINT_PATH} \
                              --save ${OUTPUT_ROOT}/output/${CHAIN_NAME}"
                        .to_string(),
                    replicas: 1,
                    resources: vec![gpu(8)],
                    completed: false,
                    job_id: None,
                },
            ],
        }
    }
}

/// Build the job request for stage `index`, with the resumable continuation
/// appended: the stage command, then a rewrite of the chain file marking the
/// stage completed, then `bce chain next` to submit whatever follows. Also
/// returns the advanced chain so the caller can persist it.
pub fn stage_launch(
    chain: &JobChain,
    index: usize,
    chain_path: &str,
) -> anyhow::Result<(CreateAiJobRequest, JobChain)> {
    let stage = &chain.stages[index];

    let mut advanced = chain.clone();
    advanced.stages[index].completed = true;
    let chain_json = serde_json::to_string(&advanced)?;

    let command = format!(
        "{} && printf '%s' {} > {} && bce chain next --chain {}",
        stage.command,
        shell_single_quote(&chain_json),
        chain_path,
        chain_path
    );

    let mut request = CreateAiJobRequest::pytorch(stage.name.clone(), stage.image.clone(), command);
    request.replicas = stage.replicas;
    request.resources = stage.resources.clone();
    Ok((request, advanced))
}

/// Quote for a POSIX shell single-quoted context.
fn shell_single_quote(input: &str) -> String {
    format!("'{}'", input.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_stage_chain() -> JobChain {
        let mut chain = JobChain::aiak_template();
        chain.name = "demo".to_string();
        chain.resource_pool_id = "cce-abcd1234".to_string();
        chain.stages.truncate(2);
        for stage in &mut chain.stages {
            stage.name = stage.name.replace("${CHAIN_NAME}", "demo");
            stage.command = "echo stage".to_string();
        }
        chain
    }

    #[test]
    fn shell_quoting_survives_embedded_quotes() {
        assert_eq!(shell_single_quote("plain"), "'plain'");
        assert_eq!(shell_single_quote("it's"), r"'it'\''s'");
    }

    #[test]
    fn first_pending_walks_the_stages_in_order() {
        let mut chain = two_stage_chain();
        assert_eq!(chain.first_pending(), Some(0));
        chain.stages[0].completed = true;
        assert_eq!(chain.first_pending(), Some(1));
        chain.stages[1].completed = true;
        assert_eq!(chain.first_pending(), None);
    }

    #[test]
    fn stage_launch_embeds_the_advanced_chain() {
        let chain = two_stage_chain();
        let (request, advanced) = stage_launch(&chain, 0, "/mnt/cluster/chain.json").unwrap();

        assert!(advanced.stages[0].completed);
        assert!(!advanced.stages[1].completed);

        assert!(request.command.starts_with("echo stage && printf '%s' '"));
        assert!(
            request
                .command
                .ends_with("> /mnt/cluster/chain.json && bce chain next --chain /mnt/cluster/chain.json")
        );
        // The embedded JSON is the advanced chain, verbatim.
        let embedded = serde_json::to_string(&advanced).unwrap();
        assert!(request.command.contains(&embedded));
    }

    #[test]
    fn chain_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chain.json");

        let chain = two_stage_chain();
        chain.save(&path).unwrap();
        let loaded = JobChain::load(&path).unwrap();

        assert_eq!(loaded.name, "demo");
        assert_eq!(loaded.stages.len(), 2);
        assert_eq!(loaded.stages[0].stage, StageKind::CheckpointConversion);
    }

    #[test]
    fn stage_kind_names_are_the_wire_strings() {
        assert_eq!(StageKind::CheckpointConversion.to_string(), "checkpoint-conversion");
        let kind: StageKind = serde_json::from_str(r#""data-preprocessing""#).unwrap();
        assert_eq!(kind, StageKind::DataPreprocessing);
    }
}
