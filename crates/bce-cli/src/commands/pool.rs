use clap::{Args, Subcommand};

use crate::commands::login::get_client_and_login_if_needed;
use crate::context::CliContext;

#[derive(Subcommand, Debug)]
pub enum PoolCommand {
    /// List resource pools.
    List(ListArgs),
    /// Show one resource pool and its nodes.
    Get { resource_pool_id: String },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long, default_value_t = 1)]
    pub page_no: u32,
    #[arg(long, default_value_t = 20)]
    pub page_size: u32,
}

pub fn handle_command(command: PoolCommand, context: &mut CliContext) -> anyhow::Result<()> {
    let client = get_client_and_login_if_needed(context)?;

    match command {
        PoolCommand::List(args) => {
            let response = client.list_resource_pools(args.page_no, args.page_size)?;
            for pool in &response.resource_pools {
                context.terminal().print(&format!(
                    "{}  {}  {}  nodes={} gpus={}",
                    pool.resource_pool_id, pool.name, pool.status, pool.node_count, pool.gpu_count
                ));
            }
            context
                .terminal()
                .print(&format!("{} pools total", response.total_count));
        }
        PoolCommand::Get { resource_pool_id } => {
            let pool = client.get_resource_pool(&resource_pool_id)?;
            context.terminal().print(&format!(
                "{}  {}  {}  k8s={}  created={}",
                pool.resource_pool_id, pool.name, pool.status, pool.k8s_version, pool.created_at
            ));
            let nodes = client.list_resource_pool_nodes(&resource_pool_id, 1, 100)?;
            for node in &nodes.nodes {
                context.terminal().print(&format!(
                    "  {}  {}  {}  gpu {}/{}",
                    node.node_name, node.instance_id, node.status, node.gpu_allocated, node.gpu_count
                ));
            }
        }
    }

    Ok(())
}
