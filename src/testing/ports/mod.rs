mod fake_python;
mod test_repository_fs;

pub use fake_python::FakePython;
pub use test_files::TestFiles;
pub use test_repository_fs::MockRepositoryFs;
