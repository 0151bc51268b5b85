//! Monotonic request sequence numbers
//!
//! Every fetch of a logical stream (task list, report) gets the next number.
//! A response is applied only if its number is still the latest issued,
//! so out-of-order responses can never overwrite newer data.

#[derive(Debug, Default, Clone)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Issue the next sequence number, superseding all earlier ones
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq != 0 && seq == self.latest
    }
}
