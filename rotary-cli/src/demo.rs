//! Scripted demonstration
//!
//! Walks a phone through a typical session and prints a console transcript
//! built from the phone's events.

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use rotary_dial::{Phone, PhoneEvent, Waiter};

use crate::settings::DemoScript;

/// What the demo should do beyond the fixed script
#[derive(Debug, Clone, Default)]
pub struct DemoOptions {
    /// Numbers to dial
    pub script: DemoScript,
    /// Prompt on `input` for a number to dial
    pub interactive: bool,
    /// Dial this number instead of prompting
    pub number: Option<String>,
}

fn rule(out: &mut impl Write, c: char) -> Result<()> {
    writeln!(out, "{}", c.to_string().repeat(40))?;
    Ok(())
}

/// Print a transcript line for each pending phone event
pub fn print_events<W: Waiter>(phone: &mut Phone<W>, out: &mut impl Write) -> Result<()> {
    for event in phone.drain_events() {
        match event {
            PhoneEvent::NumberStarted { number } => {
                writeln!(out, "\nStarting to dial: {}", number)?;
                rule(out, '-')?;
            }
            PhoneEvent::DigitDialed { digit, pulses, delay } => {
                writeln!(
                    out,
                    "Dialing {}... [{:.2}s, {} pulses]",
                    digit,
                    delay.as_secs_f64(),
                    pulses
                )?;
            }
            PhoneEvent::CallConnected { number } => {
                writeln!(out)?;
                rule(out, '=')?;
                writeln!(out, "Calling: {}", number)?;
                rule(out, '=')?;
                writeln!(out, "📞 Connected!")?;
                writeln!(out, "Status: Call in progress with {}", number)?;
            }
            PhoneEvent::CallEnded { number } => {
                writeln!(out)?;
                rule(out, '-')?;
                writeln!(out, "📞 Hanging up {}... Call ended.", number)?;
                rule(out, '-')?;
            }
            PhoneEvent::NoActiveCall => writeln!(out, "No active call to hang up.")?,
            PhoneEvent::Cleared => writeln!(out, "Dialed number cleared.")?,
        }
    }
    Ok(())
}

fn print_status<W: Waiter>(phone: &Phone<W>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\n{}\n", phone.status())?;
    Ok(())
}

/// Place a call, hold it, and hang up
fn call_and_hang_up<W: Waiter>(
    phone: &mut Phone<W>,
    hold: Duration,
    out: &mut impl Write,
) -> Result<()> {
    phone.call()?;
    print_events(phone, out)?;
    phone.waiter_mut().wait(hold);
    phone.hang_up();
    print_events(phone, out)?;
    Ok(())
}

/// Run the full demonstration
pub fn run_demo<W: Waiter>(
    phone: &mut Phone<W>,
    options: &DemoOptions,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let hold = Duration::from_millis(options.script.call_hold_ms);

    writeln!(out)?;
    rule(out, '*')?;
    writeln!(out, "LEGENDARY ROTARY PHONE SIMULATOR")?;
    rule(out, '*')?;

    writeln!(out, "\nExample 1: Dialing number digit by digit\n")?;
    if options.script.digit_by_digit.is_empty() {
        writeln!(out, "(skipped: no number configured)")?;
    } else {
        for c in options.script.digit_by_digit.chars() {
            phone.dial_digit(c)?;
            print_events(phone, out)?;
        }
        print_status(phone, out)?;
        call_and_hang_up(phone, hold, out)?;
    }

    writeln!(out, "\n\nExample 2: Dialing a complete number\n")?;
    if options.script.full_number.is_empty() {
        writeln!(out, "(skipped: no number configured)")?;
    } else {
        phone.dial_number(&options.script.full_number)?;
        print_events(phone, out)?;
        call_and_hang_up(phone, hold, out)?;
    }
    print_status(phone, out)?;

    writeln!(out, "\nExample 3: Demonstrating error handling\n")?;
    if let Err(e) = phone.dial_digit('A') {
        writeln!(out, "❌ Error caught: {}", e)?;
    }
    if let Err(e) = phone.call() {
        writeln!(out, "❌ Error caught: {}", e)?;
    }

    let number = match &options.number {
        Some(number) => Some(number.clone()),
        None if options.interactive => {
            writeln!(out, "\n\nExample 4: Interactive mode\n")?;
            write!(out, "Enter a number to dial (or press Enter to skip): ")?;
            out.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            Some(line.trim().to_string()).filter(|s| !s.is_empty())
        }
        None => None,
    };

    if let Some(number) = number {
        match phone.dial_number(&number) {
            Ok(()) => {
                print_events(phone, out)?;
                call_and_hang_up(phone, hold / 2, out)?;
            }
            Err(e) => {
                tracing::debug!(number = %number, "rejected number: {}", e);
                writeln!(out, "❌ Error: {}", e)?;
            }
        }
    }

    print_status(phone, out)?;
    Ok(())
}
