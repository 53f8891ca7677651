// GPIO Implementierungen für Sensor und Buzzer
//
// Dünne Wrapper um esp-hal Input/Output, damit die Poll-Logik nur die
// Traits aus motion-core kennt.

use esp_hal::gpio::{self, Input, InputConfig, InputPin, Output, OutputConfig, OutputPin, Pull};
use motion_core::{Buzzer, Level, MotionSensor};

/// IR-Bewegungssensor an einem digitalen Eingang
///
/// Der Sensor treibt die Leitung selbst (Push-Pull), daher kein Pull-Widerstand.
pub struct GpioMotionSensor<'a> {
    pin: Input<'a>,
}

impl<'a> GpioMotionSensor<'a> {
    /// Konfiguriert `pin` als Eingang ohne Pull
    pub fn new(pin: impl InputPin + 'a) -> Self {
        let pin = Input::new(pin, InputConfig::default().with_pull(Pull::None));
        Self { pin }
    }
}

impl MotionSensor for GpioMotionSensor<'_> {
    fn read(&mut self) -> Level {
        Level::from_bool(self.pin.is_high())
    }
}

/// Aktiver Buzzer an einem digitalen Ausgang
pub struct GpioBuzzer<'a> {
    pin: Output<'a>,
}

impl<'a> GpioBuzzer<'a> {
    /// Konfiguriert `pin` als Ausgang, initial LOW (Buzzer aus)
    pub fn new(pin: impl OutputPin + 'a) -> Self {
        let pin = Output::new(pin, gpio::Level::Low, OutputConfig::default());
        Self { pin }
    }
}

impl Buzzer for GpioBuzzer<'_> {
    fn set_level(&mut self, level: Level) {
        self.pin.set_level(gpio::Level::from(level.is_high()));
    }
}
