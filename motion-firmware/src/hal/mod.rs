// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus motion-core für die echte Hardware.
// Mock-Implementierungen für Tests liegen in motion-tests.

pub mod gpio;
pub mod link;

pub use gpio::{GpioBuzzer, GpioMotionSensor};
pub use link::StackLink;
