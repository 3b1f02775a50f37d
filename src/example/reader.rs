//! Reads annotation files into `(instance name, label)` pairs.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// A builder that reads an annotation file into
/// `(instance name, label)` pairs.
///
/// Each line holds comma- or whitespace-separated tokens.
/// The first token names the instance (e.g. an image file),
/// the last token is its label; anything in between is ignored.
/// Blank lines are skipped.
///
/// # Example
/// The following code reads an annotation file with `u32` labels.
/// ```no_run
/// use labelstats::InstanceReader;
/// let filename = "/path/to/annotation.txt";
/// let instances = InstanceReader::default()
///     .file(filename)
///     .read::<u32>()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct InstanceReader<P> {
    file: Option<P>,
}

impl<P> InstanceReader<P>
    where P: AsRef<Path>,
{
    /// Set the annotation file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file set by [`InstanceReader::file`] and returns the
    /// `(instance name, label)` pairs. This method consumes `self.`
    pub fn read<L>(self) -> io::Result<Vec<(String, L)>>
        where L: FromStr,
    {
        if self.file.is_none() {
            panic!("The annotation file name is not set");
        }
        let file = File::open(self.file.unwrap())?;
        read_instances(BufReader::new(file))
    }
}

/// Reads `(instance name, label)` pairs from any buffered reader.
/// Returns `Err` with [`io::ErrorKind::InvalidData`] when a label
/// token fails to parse as `L`.
pub fn read_instances<R, L>(reader: BufReader<R>)
    -> io::Result<Vec<(String, L)>>
    where R: Read,
          L: FromStr,
{
    let mut instances = Vec::new();

    // For each line of the file
    for (i, line) in reader.lines().enumerate() {
        let line = line?;

        let tokens = line.split([',', ' ', '\t'])
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>();
        if tokens.is_empty() { continue; }

        let name = tokens[0].to_string();
        let token = tokens[tokens.len() - 1];
        let label = token.parse::<L>()
            .map_err(|_| io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "The file contains an unparsable label. \
                    Got {token} in Line {i}"
                ),
            ))?;

        instances.push((name, label));
    }

    Ok(instances)
}
