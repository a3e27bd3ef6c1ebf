//! Contract creation over RPC

use alloy::{
    network::{Ethereum, ReceiptResponse, TransactionBuilder},
    primitives::Address,
    providers::Provider,
    rpc::types::eth::TransactionRequest,
    transports::http::{Client, Http},
};
use tracing::info;

use crate::{
    deploy::{ContractDeployer, DeployRequest, DeployedContract},
    errors::ScriptError,
};

/// Deploys contracts by sending create transactions through an RPC provider
pub struct RpcDeployer<P> {
    /// Provider signing and sending the transactions
    provider: P,
    /// Account the provider signs with
    deployer: Address,
}

impl<P> RpcDeployer<P> {
    /// Deployer sending from `deployer` through `provider`
    pub fn new(provider: P, deployer: Address) -> Self {
        Self { provider, deployer }
    }
}

impl<P: Provider<Http<Client>, Ethereum>> ContractDeployer for RpcDeployer<P> {
    async fn deploy(&self, request: DeployRequest) -> Result<DeployedContract, ScriptError> {
        // Build the tx
        let tx_request = TransactionRequest::default()
            .with_from(self.deployer)
            .with_deploy_code(request.deploy_code())
            .with_value(request.value);

        // Send it
        let pending_tx = self
            .provider
            .send_transaction(tx_request)
            .await
            .map_err(|e| ScriptError::ContractDeployment(format!("{}: {}", request.contract, e)))?;
        info!(
            "Pending {} deployment... {}",
            request.contract,
            pending_tx.tx_hash()
        );

        // Wait for the transaction to be included.
        let receipt = pending_tx
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(format!("{}: {}", request.contract, e)))?;

        if !receipt.status() {
            return Err(ScriptError::ContractDeployment(format!(
                "{} constructor reverted in tx {}",
                request.contract, receipt.transaction_hash
            )));
        }
        let address = receipt.contract_address.ok_or_else(|| {
            ScriptError::ContractDeployment(format!(
                "{} receipt has no contract address",
                request.contract
            ))
        })?;
        info!(
            "{} deployment done on block: {:?}",
            request.contract, receipt.block_number
        );

        Ok(DeployedContract {
            contract: request.contract,
            address,
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
        })
    }
}
