use super::form::{
    DEFAULT_AGE, DEFAULT_BMI, DEFAULT_CHILDREN, DEFAULT_REGION, DEFAULT_SEX, DEFAULT_SMOKER,
    PredictionForm,
};
use crate::domain::insurance::{Region, Sex, Smoker};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Asks for every field in turn, pre-filled from `initial`.
///
/// A blank answer (or end of input) keeps the shown value; an unparsable
/// answer prints the reason and asks again.
pub fn prompt_form<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    initial: &PredictionForm,
) -> io::Result<PredictionForm> {
    Ok(PredictionForm {
        age: Some(ask(input, output, "Age", initial.age.unwrap_or(DEFAULT_AGE))?),
        bmi: Some(ask(input, output, "BMI", initial.bmi.unwrap_or(DEFAULT_BMI))?),
        children: Some(ask(
            input,
            output,
            "Children",
            initial.children.unwrap_or(DEFAULT_CHILDREN),
        )?),
        sex: Some(ask(
            input,
            output,
            &format!("Sex ({})", labels(Sex::ALL, Sex::label).join("/")),
            initial.sex.unwrap_or(DEFAULT_SEX),
        )?),
        smoker: Some(ask(
            input,
            output,
            &format!("Smoker ({})", labels(Smoker::ALL, Smoker::label).join("/")),
            initial.smoker.unwrap_or(DEFAULT_SMOKER),
        )?),
        region: Some(ask(
            input,
            output,
            &format!("Region ({})", labels(Region::ALL, Region::label).join("/")),
            initial.region.unwrap_or(DEFAULT_REGION),
        )?),
    })
}

fn labels<T>(all: &[T], label: fn(&T) -> &'static str) -> Vec<&'static str> {
    all.iter().map(label).collect()
}

fn ask<T, R, W>(input: &mut R, output: &mut W, label: &str, default: T) -> io::Result<T>
where
    T: FromStr + Display,
    T::Err: Display,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{} [{}]: ", label, default)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(default);
        }

        let answer = line.trim();
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(e) => writeln!(output, "  {}", e)?,
        }
    }
}
