pub mod a001_project;
pub mod d400_project_summary;
