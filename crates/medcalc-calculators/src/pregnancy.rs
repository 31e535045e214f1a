use jiff::Span;
use jiff::civil::Date;
use medcalc_core::band::{Band, BandTable};
use medcalc_core::models::{DatingMethod, GestationalAge, PregnancyInfo, PregnancyInputs, Trimester};

/// 40 weeks from the anchor date.
pub const TERM_DAYS: i64 = 280;

/// Trimester by completed weeks: under 13 first, under 27 second.
pub static TRIMESTERS: BandTable<Trimester> = BandTable::new(
    &[
        Band { upper: 12.0, value: Trimester::First },
        Band { upper: 26.0, value: Trimester::Second },
    ],
    Trimester::Third,
);

/// Gestational age and due date as of `today`.
///
/// Returns `None` without an LMP. When an ultrasound date and the
/// gestational age measured at that scan are both present, the LMP implied
/// by the scan replaces the reported one as the anchor. A `today` before
/// the anchor yields a negative gestational age; rejecting such ranges is
/// the caller's job.
pub fn calculate_pregnancy_info(inputs: &PregnancyInputs, today: Date) -> Option<PregnancyInfo> {
    let lmp = inputs.lmp_date?;

    let (anchor_date, method) = match (inputs.ultrasound_date, inputs.ga_weeks_at_ultrasound) {
        (Some(scan_date), Some(weeks)) => {
            let days = i64::from(weeks) * 7 + i64::from(inputs.ga_days_at_ultrasound.unwrap_or(0));
            (shift(scan_date, -days)?, DatingMethod::Ultrasound)
        }
        _ => (lmp, DatingMethod::Lmp),
    };

    let due_date = shift(anchor_date, TERM_DAYS)?;
    let gestational_age = GestationalAge::from_days(days_between(anchor_date, today)?);
    let days_until_due = days_between(today, due_date)?;
    let trimester = *TRIMESTERS.classify(f64::from(gestational_age.weeks));

    tracing::debug!(
        %anchor_date,
        %due_date,
        ga_days = gestational_age.total_days,
        ?method,
        "pregnancy dated"
    );

    Some(PregnancyInfo {
        due_date,
        gestational_age,
        trimester,
        method,
        anchor_date,
        days_until_due,
    })
}

/// [`calculate_pregnancy_info`] against the current date in the system time zone.
pub fn calculate_pregnancy_info_now(inputs: &PregnancyInputs) -> Option<PregnancyInfo> {
    calculate_pregnancy_info(inputs, jiff::Zoned::now().date())
}

fn shift(date: Date, days: i64) -> Option<Date> {
    let shifted = Span::new()
        .try_days(days)
        .and_then(|span| date.checked_add(span));
    match shifted {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(%date, days, error = %e, "date arithmetic out of range");
            None
        }
    }
}

fn days_between(from: Date, to: Date) -> Option<i32> {
    match from.until(to) {
        Ok(span) => Some(span.get_days()),
        Err(e) => {
            tracing::warn!(%from, %to, error = %e, "date difference out of range");
            None
        }
    }
}
