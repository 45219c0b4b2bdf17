pub mod students;

pub use self::students::model::Student;
