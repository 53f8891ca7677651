// Task-Modul: Enthält alle Embassy Tasks
//
// WiFi-Tasks treiben nur den Treiber und den Netzwerk-Stack.
// Die Anwendungslogik läuft komplett sequentiell im Motion Task.

pub mod motion;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use motion::motion_task;
pub use wifi::{connection_task, net_task};
