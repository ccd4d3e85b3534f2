use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use std::io::{BufRead, Cursor, Read};
use std::path::Path;

const PARENT_PREFIX: &[u8] = b"parent ";

/// Read-only view of the loose object store (`.git/objects`)
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

// TODO: read packfiles so that commits moved out of loose storage by `git gc` are not reported as missing
impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    /// Parent IDs recorded in a commit object, in record order
    ///
    /// # Returns
    ///
    /// `None` if no object file exists for `object_id`, an empty list for a
    /// root commit.
    pub fn read_parents(&self, object_id: &ObjectId) -> anyhow::Result<Option<Vec<ObjectId>>> {
        let object_path = self.path.join(object_id.to_path());

        let Some(object_content) = self.read_object(&object_path)? else {
            return Ok(None);
        };
        let mut object_reader = Cursor::new(object_content);

        let object_type = ObjectType::parse_object_type(&mut object_reader)
            .with_context(|| format!("Invalid object header in {}", object_path.display()))?;
        if object_type != ObjectType::Commit {
            anyhow::bail!("Object {} is a {}, not a commit", object_id, object_type);
        }

        Self::parse_parents(object_reader)
            .with_context(|| format!("Invalid commit object {}", object_id))
            .map(Some)
    }

    /// Collect `parent` lines from the commit header
    ///
    /// The header ends at the first empty line; the message after it is not scanned.
    fn parse_parents(reader: impl BufRead) -> anyhow::Result<Vec<ObjectId>> {
        let mut parents = Vec::new();

        for line in reader.split(b'\n') {
            let line = line?;
            if line.is_empty() {
                break;
            }

            if let Some(parent_oid) = line.strip_prefix(PARENT_PREFIX) {
                let parent_oid = std::str::from_utf8(parent_oid)?.trim();
                parents.push(ObjectId::try_parse(parent_oid.to_string())?);
            }
        }

        Ok(parents)
    }

    fn read_object(&self, object_path: &Path) -> anyhow::Result<Option<Bytes>> {
        let object_content = match std::fs::read(object_path) {
            Ok(object_content) => object_content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).context(format!(
                    "Unable to read object file {}",
                    object_path.display()
                ));
            }
        };

        Self::decompress(object_content.into()).map(Some)
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }
}
