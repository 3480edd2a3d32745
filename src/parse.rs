//! Readers for the whitespace separated location files.
//!
//! Adjacency lines hold a location name followed by the names it connects to.
//! Coordinate lines hold a location name followed by its two components.
//! Blank lines are skipped in both.

use crate::config::DataConfig;
use crate::errors::ParseError;
use crate::geometry::Point;
use crate::graph::{AdjacencyMap, CoordinateMap};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use log::{info, warn};


pub fn parse_adjacency<R: BufRead>(reader: R) -> Result<AdjacencyMap, ParseError> {
    let mut adjacency = AdjacencyMap::default();

    for (number, line) in numbered_lines(reader) {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };

        let neighbors = tokens.map(str::to_string).collect();
        if adjacency.insert(name.to_string(), neighbors).is_some() {
            warn!("line {}: {} listed again, keeping the later adjacency", number, name);
        }
    }

    Ok(adjacency)
}


pub fn parse_coordinates<R: BufRead>(reader: R) -> Result<CoordinateMap, ParseError> {
    let mut coordinates = CoordinateMap::default();

    for (number, line) in numbered_lines(reader) {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let (name, first, second) = match tokens.as_slice() {
            [] => continue,
            [name, first, second] => (*name, *first, *second),
            _ => {
                return Err(ParseError::MalformedLine {
                    line: number,
                    reason: format!("expected a name and two numbers, found {} fields", tokens.len()),
                });
            }
        };

        let point = Point::new(parse_number(number, first)?, parse_number(number, second)?);
        if coordinates.insert(name.to_string(), point).is_some() {
            warn!("line {}: {} listed again, keeping the later coordinate", number, name);
        }
    }

    Ok(coordinates)
}


pub fn read_adjacency(path: &Path) -> Result<AdjacencyMap, ParseError> {
    let adjacency = parse_adjacency(open(path)?).map_err(|e| with_path(e, path))?;
    info!("read {} adjacency entries from {}", adjacency.len(), path.display());
    Ok(adjacency)
}


pub fn read_coordinates(path: &Path) -> Result<CoordinateMap, ParseError> {
    let coordinates = parse_coordinates(open(path)?).map_err(|e| with_path(e, path))?;
    info!("read {} coordinates from {}", coordinates.len(), path.display());
    Ok(coordinates)
}


/// Read both location files named by the configuration
pub fn load(config: &DataConfig) -> Result<(AdjacencyMap, CoordinateMap), ParseError> {
    Ok((read_adjacency(&config.adjacency)?, read_coordinates(&config.coordinates)?))
}


/// Lines paired with their 1-based line number, read errors mapped to ParseError
fn numbered_lines<R: BufRead>(reader: R) -> impl Iterator<Item = (usize, Result<String, ParseError>)> {
    reader.lines().enumerate().map(|(i, line)| {
        let line = line.map_err(|source| ParseError::Io { path: Default::default(), source });
        (i + 1, line)
    })
}

fn parse_number(line: usize, value: &str) -> Result<f64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber { line, value: value.to_string() })
}

fn open(path: &Path) -> Result<BufReader<File>, ParseError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ParseError::Io { path: path.to_path_buf(), source })
}

/// Attach the file path to read errors raised while streaming lines
fn with_path(error: ParseError, path: &Path) -> ParseError {
    match error {
        ParseError::Io { source, .. } => ParseError::Io { path: path.to_path_buf(), source },
        other => other,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_adjacency() {
        let input = "Anthony Bluff_City Kiowa Attica Harper\nAttica Medicine_Lodge\n\nAugusta Winfield Andover Leon Wichita\n";
        let adjacency = parse_adjacency(Cursor::new(input)).unwrap();

        assert_eq!(adjacency.keys().collect::<Vec<_>>(), vec!["Anthony", "Attica", "Augusta"]);
        assert_eq!(adjacency["Anthony"], vec!["Bluff_City", "Kiowa", "Attica", "Harper"]);
        assert_eq!(adjacency["Attica"], vec!["Medicine_Lodge"]);
        assert_eq!(adjacency["Augusta"], vec!["Winfield", "Andover", "Leon", "Wichita"]);
    }

    #[test]
    fn test_parse_adjacency_whitespace() {
        let input = "  \t\n A\tB   C \r\nD\n";
        let adjacency = parse_adjacency(Cursor::new(input)).unwrap();

        assert_eq!(adjacency.len(), 2);
        assert_eq!(adjacency["A"], vec!["B", "C"]);
        assert!(adjacency["D"].is_empty());
    }

    #[test]
    fn test_parse_adjacency_repeated_name() {
        let input = "A B\nC D\nA E\n";
        let adjacency = parse_adjacency(Cursor::new(input)).unwrap();

        assert_eq!(adjacency.keys().collect::<Vec<_>>(), vec!["A", "C"]);
        assert_eq!(adjacency["A"], vec!["E"]);
    }

    #[test]
    fn test_parse_coordinates() {
        let input = "Abilene 38.9220277 -97.2666667\nAndover 37.6868403 -97.1657752\n\nAnthony 37.1575168 -98.0728946\n";
        let coordinates = parse_coordinates(Cursor::new(input)).unwrap();

        assert_eq!(coordinates.len(), 3);
        assert_eq!(coordinates["Abilene"], Point::new(38.9220277, -97.2666667));
        assert_eq!(coordinates["Andover"], Point::new(37.6868403, -97.1657752));
        assert_eq!(coordinates["Anthony"], Point::new(37.1575168, -98.0728946));
    }

    #[test]
    fn test_parse_coordinates_bad_number() {
        let input = "Abilene 38.9 -97.2\nAndover north -97.1\n";
        let result = parse_coordinates(Cursor::new(input));

        assert!(matches!(
            result,
            Err(ParseError::InvalidNumber { line: 2, value }) if value == "north"
        ));
    }

    #[test]
    fn test_parse_coordinates_wrong_field_count() {
        assert!(matches!(
            parse_coordinates(Cursor::new("Abilene 38.9\n")),
            Err(ParseError::MalformedLine { line: 1, .. })
        ));
        assert!(matches!(
            parse_coordinates(Cursor::new("\nAbilene 38.9 -97.2 12\n")),
            Err(ParseError::MalformedLine { line: 2, .. })
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let path = Path::new("does/not/exist.txt");
        assert!(matches!(
            read_adjacency(path),
            Err(ParseError::Io { path: p, .. }) if p == path
        ));
    }
}
