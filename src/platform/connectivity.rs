use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tracing::debug;

/// Point-in-time state of the host's active network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkState {
    Connected,
    Connecting,
    Disconnected,
}

impl NetworkState {
    pub fn is_connected_or_connecting(self) -> bool {
        matches!(self, NetworkState::Connected | NetworkState::Connecting)
    }

    fn to_raw(self) -> u8 {
        match self {
            NetworkState::Connected => 0,
            NetworkState::Connecting => 1,
            NetworkState::Disconnected => 2,
        }
    }

    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => NetworkState::Connected,
            1 => NetworkState::Connecting,
            _ => NetworkState::Disconnected,
        }
    }
}

/// Source of the current network state, queried fresh on every call
#[async_trait]
pub trait ConnectivityProvider: Send + Sync {
    async fn network_state(&self) -> NetworkState;

    /// True while a network is connected or in the process of connecting
    async fn is_connected(&self) -> bool {
        self.network_state().await.is_connected_or_connecting()
    }
}

#[async_trait]
impl<F> ConnectivityProvider for F
where
    F: Fn() -> NetworkState + Send + Sync,
{
    async fn network_state(&self) -> NetworkState {
        self()
    }
}

/// Network state pushed in by the host; clones observe the same state
#[derive(Debug, Clone)]
pub struct SharedConnectivity {
    state: Arc<AtomicU8>,
}

impl SharedConnectivity {
    pub fn new(initial: NetworkState) -> Self {
        Self {
            state: Arc::new(AtomicU8::new(initial.to_raw())),
        }
    }

    pub fn set(&self, state: NetworkState) {
        self.state.store(state.to_raw(), Ordering::Release);
    }

    pub fn get(&self) -> NetworkState {
        NetworkState::from_raw(self.state.load(Ordering::Acquire))
    }
}

impl Default for SharedConnectivity {
    fn default() -> Self {
        Self::new(NetworkState::Connected)
    }
}

#[async_trait]
impl ConnectivityProvider for SharedConnectivity {
    async fn network_state(&self) -> NetworkState {
        self.get()
    }
}

/// Reports connectivity by opening a TCP connection to a known endpoint
#[derive(Debug, Clone)]
pub struct TcpConnectivity {
    target: SocketAddr,
    timeout: Duration,
}

impl TcpConnectivity {
    pub fn new(target: SocketAddr) -> Self {
        Self {
            target,
            timeout: Duration::from_secs(2),
        }
    }

    /// Set how long a connection attempt may take before the network counts as down
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl ConnectivityProvider for TcpConnectivity {
    async fn network_state(&self) -> NetworkState {
        match tokio::time::timeout(self.timeout, TcpStream::connect(self.target)).await {
            Ok(Ok(_)) => NetworkState::Connected,
            Ok(Err(e)) => {
                debug!(addr = %self.target, error = %e, "connectivity check failed");
                NetworkState::Disconnected
            }
            Err(_) => {
                debug!(addr = %self.target, "connectivity check timed out");
                NetworkState::Disconnected
            }
        }
    }
}
