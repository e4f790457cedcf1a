use embassy_sync::{blocking_mutex::raw::RawMutex, channel::Channel};

/// One keystroke produced by an intercepted key, consumed by the host report
/// writer.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    Basic(u8, bool),
    Modifiers(u8, bool),
    ClearOneshot,
}

impl KeyEvent {
    pub(crate) fn basic(code: u16, is_down: bool) -> Self {
        Self::Basic(code as u8, is_down)
    }
}

pub struct ReportChannel<M: RawMutex, const N: usize>(Channel<M, KeyEvent, N>);

impl<M: RawMutex, const N: usize> Default for ReportChannel<M, N> {
    fn default() -> Self {
        Self(Channel::new())
    }
}

impl<M: RawMutex, const N: usize> ReportChannel<M, N> {
    pub async fn receive(&self) -> KeyEvent {
        self.0.receive().await
    }

    pub fn try_receive(&self) -> Option<KeyEvent> {
        self.0.try_receive().ok()
    }

    pub(crate) fn report(&self, event: KeyEvent) {
        if self.0.try_send(event).is_err() {
            crate::warn!("report buffer full, event dropped");
        }
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod test;
