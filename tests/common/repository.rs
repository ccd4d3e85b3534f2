use assert_fs::TempDir;
use derive_new::new;
use fake::Fake;
use fake::faker::internet::en::FreeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use sha1::{Digest, Sha1};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Hash of the empty tree, valid for every commit written by the fixture
const EMPTY_TREE_OID: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

#[derive(Debug, Clone, new)]
struct RandomAuthor {
    name: String,
    email: String,
}

fn generate_random_author() -> RandomAuthor {
    let name = Name().fake::<String>().replace(" ", "_");
    let email = FreeEmail().fake::<String>();
    RandomAuthor::new(name, email)
}

/// A `.git` directory populated by hand with loose commit objects and branch refs
pub struct RepositoryFixture {
    dir: TempDir,
    timestamp: u64,
}

impl RepositoryFixture {
    pub fn init(dir: TempDir) -> Self {
        let git_dir = dir.path().join(".git");
        std::fs::create_dir_all(git_dir.join("objects")).expect("Failed to create objects dir");
        std::fs::create_dir_all(git_dir.join("refs").join("heads"))
            .expect("Failed to create refs dir");
        std::fs::write(git_dir.join("HEAD"), "ref: refs/heads/main\n")
            .expect("Failed to write HEAD");

        Self {
            dir,
            timestamp: 1_700_000_000,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn git_path(&self) -> PathBuf {
        self.dir.path().join(".git")
    }

    /// Write a commit with the given parents and return its object ID
    pub fn commit(&mut self, parents: &[&str]) -> String {
        let body = self.commit_body(parents);
        let object = Self::frame_object(&body);
        let oid = format!("{:x}", Sha1::digest(&object));

        self.write_raw_object(&oid, &object);
        oid
    }

    /// Write a commit under an arbitrary object ID, bypassing content hashing
    pub fn commit_at(&mut self, oid: &str, parents: &[&str]) {
        let body = self.commit_body(parents);
        let object = Self::frame_object(&body);

        self.write_raw_object(oid, &object);
    }

    pub fn branch(&self, name: &str, oid: &str) {
        let ref_path = self.git_path().join("refs").join("heads").join(name);
        std::fs::create_dir_all(ref_path.parent().expect("ref path has a parent"))
            .expect("Failed to create ref dir");
        std::fs::write(ref_path, format!("{oid}\n")).expect("Failed to write ref");
    }

    pub fn remove_object(&self, oid: &str) {
        std::fs::remove_file(self.object_path(oid)).expect("Failed to remove object");
    }

    fn commit_body(&mut self, parents: &[&str]) -> String {
        let author = generate_random_author();
        self.timestamp += 60;

        let mut lines = vec![format!("tree {EMPTY_TREE_OID}")];
        for parent in parents {
            lines.push(format!("parent {parent}"));
        }
        lines.push(format!(
            "author {} <{}> {} +0000",
            author.name, author.email, self.timestamp
        ));
        lines.push(format!(
            "committer {} <{}> {} +0000",
            author.name, author.email, self.timestamp
        ));
        lines.push(String::new());
        lines.push(Sentence(3..8).fake::<String>());

        lines.join("\n") + "\n"
    }

    fn frame_object(body: &str) -> Vec<u8> {
        let mut object = format!("commit {}\0", body.len()).into_bytes();
        object.extend_from_slice(body.as_bytes());
        object
    }

    fn object_path(&self, oid: &str) -> PathBuf {
        self.git_path().join("objects").join(&oid[..2]).join(&oid[2..])
    }

    fn write_raw_object(&self, oid: &str, object: &[u8]) {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(object).expect("Failed to compress object");
        let compressed = encoder.finish().expect("Failed to finish compression");

        let path = self.object_path(oid);
        std::fs::create_dir_all(path.parent().expect("object path has a parent"))
            .expect("Failed to create object dir");
        std::fs::write(path, compressed).expect("Failed to write object");
    }
}
