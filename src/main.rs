use std::sync::Arc;

use rideline::config::Config;
use rideline::engine::Engine;
use rideline::external::{
    ActiveRideFlag, DynLocalStore, DynRideStore, MemoryLocalStore, MemoryRideStore, PgStore,
    RecordingNavigator, StaticProfile,
};
use rideline::server::serve;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env().unwrap();

    let (rides, local): (DynRideStore, DynLocalStore) = match &config.database_url {
        Some(url) => {
            let store = Arc::new(PgStore::new(url, config.max_connections).await.unwrap());
            let rides: DynRideStore = store.clone();
            let local: DynLocalStore = store;
            (rides, local)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, keeping orders in memory");
            let rides: DynRideStore = Arc::new(MemoryRideStore::new());
            let local: DynLocalStore = Arc::new(MemoryLocalStore::new());
            (rides, local)
        }
    };

    let engine = Engine::new(
        rides,
        local,
        Arc::new(StaticProfile(config.profile.clone())),
        Arc::new(ActiveRideFlag::default()),
        Arc::new(RecordingNavigator::new()),
        config.workflow(),
    );

    serve(engine, config.listen_addr).await.unwrap();
}
