//! Wires the stores, gateway and catalog from a loaded config.

use std::sync::Arc;

use taklifnoma_storage::catalog::Catalog;
use taklifnoma_storage::client::build_client;
use taklifnoma_storage::gateway::{Gateway, Identity, Timeouts};
use taklifnoma_storage::local::{FileStore, LocalStore};
use taklifnoma_storage::remote::{RemoteStore, Unavailable};
use taklifnoma_storage::s3::S3Remote;

use crate::config::{RemoteConfig, TaklifConfig};

pub struct App {
    pub gateway: Gateway,
    pub catalog: Catalog,
    pub identity: Identity,
}

impl App {
    pub async fn from_config(config: &TaklifConfig) -> Self {
        let remote: Arc<dyn RemoteStore> = match &config.remote {
            RemoteConfig::None => {
                tracing::info!("no remote configured, records stay on this device");
                Arc::new(Unavailable)
            }
            RemoteConfig::S3 {
                bucket,
                region,
                profile,
            } => {
                tracing::info!(bucket = %bucket, region = %region, "using S3 remote");
                let client = build_client(region, profile.as_deref()).await;
                Arc::new(S3Remote::new(client, bucket.clone()))
            }
        };
        let local: Arc<dyn LocalStore> = Arc::new(FileStore::new(config.data_dir.clone()));
        Self::with_stores(remote, local, config.timeouts.into(), config.user_id.clone())
    }

    pub fn with_stores(
        remote: Arc<dyn RemoteStore>,
        local: Arc<dyn LocalStore>,
        timeouts: Timeouts,
        user_id: Option<String>,
    ) -> Self {
        let catalog = Catalog::new(Arc::clone(&remote)).with_timeout(timeouts.read);
        let gateway = Gateway::new(remote, local).with_timeouts(timeouts);
        Self {
            gateway,
            catalog,
            identity: Identity { user_id },
        }
    }
}
