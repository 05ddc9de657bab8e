pub mod connectivity;
pub mod strings;
pub mod toast;

// Re-export commonly used types
pub use connectivity::{ConnectivityProvider, NetworkState, TcpConnectivity, SharedConnectivity};
pub use strings::{DefaultStrings, StringKey, StringProvider, StringTable};
pub use toast::{ChannelToaster, Toast, ToastDuration, Toaster, TracingToaster, show_toast};
