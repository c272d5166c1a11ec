use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::SolveError;

pub fn parse_json<T: DeserializeOwned>(data: &str) -> Result<T, SolveError> {
    Ok(serde_json::from_str(data)?)
}

pub fn to_json<T: Serialize>(data: &T, pretty: bool) -> Result<String, SolveError> {
    let json = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };
    Ok(json)
}

pub fn load_json<T: DeserializeOwned, TPath: AsRef<Path>>(path: TPath) -> Result<T, SolveError> {
    // Open the file and read all bytes
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SolveError::io(path, e))?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let rows: Vec<Vec<String>> = parse_json(r#"[["a","b"],["c","d"]]"#).unwrap();
        assert_eq!(rows[1][0], "c");
        assert_eq!(to_json(&rows, false).unwrap(), r#"[["a","b"],["c","d"]]"#);
        assert!(to_json(&rows, true).unwrap().contains('\n'));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_json::<Vec<String>, _>("/no/such/board.json").unwrap_err();
        assert!(matches!(err, SolveError::Io { .. }));
    }
}
