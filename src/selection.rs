use crate::errors::SelectionError;

use std::io::{BufRead, Write};
use log::debug;


/// Check a typed index against the number of options
pub fn validate_index(input: &str, bound: usize) -> Result<usize, SelectionError> {
    if bound == 0 {
        return Err(SelectionError::NoOptions);
    }
    let index: i64 = input
        .trim()
        .parse()
        .map_err(|_| SelectionError::NotANumber { bound })?;

    usize::try_from(index)
        .ok()
        .filter(|&i| i < bound)
        .ok_or(SelectionError::OutOfRange { bound })
}


/// One "index - name" line per option
pub fn format_options<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| format!("{i} - {name}"))
        .collect::<Vec<_>>()
        .join("\n")
}


/// Ask until a valid index is entered
/// Invalid entries print the validation message and ask again
pub fn prompt_index<R, W>(reader: &mut R, writer: &mut W, options: &str, prompt: &str, bound: usize) -> Result<usize, SelectionError>
where
    R: BufRead,
    W: Write,
{
    if bound == 0 {
        return Err(SelectionError::NoOptions);
    }

    let mut line = String::new();
    loop {
        writeln!(writer, "{options}")?;
        write!(writer, "{prompt} ")?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(SelectionError::EndOfInput);
        }

        match validate_index(&line, bound) {
            Ok(index) => return Ok(index),
            Err(error) => {
                debug!("rejected selection {:?}", line.trim());
                writeln!(writer, "{error}")?;
            }
        }
    }
}
