//! Channel responsiveness matrix
//!
//! WhatsApp and Email cells are measured from the records. SMS and Website
//! have no per-customer data, so their cells are estimated from a fixed base
//! rate per segment plus a random perturbation. Those rows are flagged
//! `estimated` and vary between calls unless a deterministic noise source is
//! supplied.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::grouping::CountSum;
use super::models::ChannelResponse;
use super::records::CustomerRecord;
use super::rounding::round_i64;
use super::tables::{segment_def, Channel, CHANNELS, CHANNEL_SEGMENTS, RESPONSE_NOISE_SPAN};

/// Source of the perturbation added to estimated response rates
pub trait ResponseNoise {
    /// A value in `[-RESPONSE_NOISE_SPAN, RESPONSE_NOISE_SPAN)`
    fn perturbation(&mut self) -> f64;
}

/// Perturbation drawn from the thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngNoise;

impl ResponseNoise for ThreadRngNoise {
    fn perturbation(&mut self) -> f64 {
        rand::rng().random_range(-RESPONSE_NOISE_SPAN..RESPONSE_NOISE_SPAN)
    }
}

/// Reproducible perturbation from a seeded generator
#[derive(Debug, Clone)]
pub struct SeededNoise {
    rng: StdRng,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ResponseNoise for SeededNoise {
    fn perturbation(&mut self) -> f64 {
        self.rng
            .random_range(-RESPONSE_NOISE_SPAN..RESPONSE_NOISE_SPAN)
    }
}

/// No perturbation; estimated cells equal their base rate
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNoise;

impl ResponseNoise for NoNoise {
    fn perturbation(&mut self) -> f64 {
        0.0
    }
}

/// Per-segment means of the measured channel rates
struct MeasuredRates {
    whatsapp: [i64; 4],
    email: [i64; 4],
}

fn measure(records: &[CustomerRecord]) -> MeasuredRates {
    let mut whatsapp = [0; 4];
    let mut email = [0; 4];
    for (slot, (segment, _)) in CHANNEL_SEGMENTS.iter().enumerate() {
        let mut wa = CountSum::default();
        let mut em = CountSum::default();
        for record in segment_def(*segment).members(records) {
            wa.add(record.whatsapp_response_rate());
            em.add(record.email_open_rate());
        }
        whatsapp[slot] = round_i64(wa.mean());
        email[slot] = round_i64(em.mean() * 100.0);
    }
    MeasuredRates { whatsapp, email }
}

fn estimate(noise: &mut dyn ResponseNoise) -> [i64; 4] {
    let mut cells = [0; 4];
    for (cell, (_, base)) in cells.iter_mut().zip(CHANNEL_SEGMENTS.iter()) {
        let rate = (base + noise.perturbation()).clamp(0.0, 100.0);
        *cell = round_i64(rate);
    }
    cells
}

fn row(label: &str, cells: [i64; 4], estimated: bool) -> ChannelResponse {
    let [champions, loyal, atrisk, lost] = cells;
    ChannelResponse {
        channel: label.to_string(),
        champions,
        loyal,
        atrisk,
        lost,
        estimated,
    }
}

/// Channel matrix using the thread-local random source for estimated cells
pub fn channel_matrix(records: &[CustomerRecord]) -> Vec<ChannelResponse> {
    channel_matrix_with(records, &mut ThreadRngNoise)
}

/// Channel matrix with an explicit noise source
pub fn channel_matrix_with(
    records: &[CustomerRecord],
    noise: &mut dyn ResponseNoise,
) -> Vec<ChannelResponse> {
    if records.is_empty() {
        return Vec::new();
    }

    let measured = measure(records);
    CHANNELS
        .iter()
        .map(|def| match def.channel {
            Channel::WhatsApp => row(def.label, measured.whatsapp, false),
            Channel::Email => row(def.label, measured.email, false),
            Channel::Sms | Channel::Website => row(def.label, estimate(noise), true),
        })
        .collect()
}
