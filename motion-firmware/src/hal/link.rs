// Netzwerk-Status über den embassy-net Stack

use defmt::info;
use embassy_net::Stack;
use motion_core::NetworkLink;

/// Verbindungsstatus des WLAN
///
/// Gilt als assoziiert sobald der Link steht und DHCP eine IPv4-Adresse
/// geliefert hat. Vorher kann kein Upload gelingen.
#[derive(Clone, Copy)]
pub struct StackLink {
    stack: Stack<'static>,
}

impl StackLink {
    pub fn new(stack: Stack<'static>) -> Self {
        Self { stack }
    }
}

impl NetworkLink for StackLink {
    fn is_associated(&mut self) -> bool {
        let associated = self.stack.is_link_up() && self.stack.config_v4().is_some();
        if !associated {
            info!("WiFi: Connecting...");
        }
        associated
    }
}
