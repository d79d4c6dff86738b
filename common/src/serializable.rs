use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

pub trait Serializable {
    fn to_json_pretty(&self) -> Result<String, serde_json::Error>;
    fn serialize_to_file(&self, path: &Path) -> Result<(), std::io::Error>;
    fn deserialize_from_file(path: &Path) -> Result<Self, std::io::Error>
    where
        Self: Sized;
}

impl<T> Serializable for T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn serialize_to_file(&self, path: &Path) -> Result<(), std::io::Error> {
        // Create file if doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = File::create(path)?;

        let serialized = self.to_json_pretty()?;
        file.write_all(serialized.as_bytes())?;
        Ok(())
    }

    fn deserialize_from_file(path: &Path) -> Result<Self, std::io::Error>
    where
        Self: Sized,
    {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let value: T = serde_json::from_str(&contents)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Serializable;
    use crate::report::FibonacciReport;

    #[test]
    fn report_survives_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");
        let report = FibonacciReport::new(10, "fibonacci_recursive(10)", 55, "iterative");

        report.serialize_to_file(&path).unwrap();
        let loaded = FibonacciReport::deserialize_from_file(&path).unwrap();
        assert_eq!(loaded, report);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FibonacciReport::deserialize_from_file(&dir.path().join("absent.json"));
        assert!(result.is_err());
    }
}
