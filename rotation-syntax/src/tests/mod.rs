mod parser;
mod pattern;
