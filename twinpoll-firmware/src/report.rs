//! Event and failure logging

use defmt::{debug, info, warn};

use twinpoll_core::{Event, StepError, StepReport};
use twinpoll_drivers::SerialError;

/// Log one controller event
pub fn event(event: &Event) {
    match event {
        Event::Prompted => debug!("Prompt written"),
        Event::ProductComputed {
            expression,
            product,
            lit,
        } => info!(
            "{} * {} = {}, LED {}",
            expression.value_a,
            expression.value_b,
            product,
            if *lit { "on" } else { "off" }
        ),
        Event::InputRejected(error) => warn!("Expression discarded: {}", error),
        Event::RoundStarted => info!("Round started"),
        Event::ChoiceRecorded { party, choice } => info!("{} chose {}", party, choice),
        Event::KeyIgnored(cell) => debug!("Key {} is not a move", cell.index()),
        Event::RoundResolved(outcome) => match outcome.winner() {
            Some((party, choice)) => info!("{} wins with {}", party, choice),
            None => info!("Round tied on {}", outcome.party_a),
        },
    }
}

/// Log the events of one poll step, then its serial failure if any
pub fn step<'a, O>(report: &'a StepReport<O, SerialError, SerialError>)
where
    &'a O: IntoIterator<Item = &'a Event>,
{
    for e in &report.output {
        event(e);
    }
    if let Some(error) = &report.error {
        step_error(error);
    }
}

/// Log a serial failure
pub fn step_error(error: &StepError<SerialError, SerialError>) {
    match error {
        StepError::Receive(e) => warn!("Serial receive failed: {}", e),
        StepError::Transmit(e) => warn!("Serial transmit failed: {}", e),
    }
}
