mod declaration;
mod parser;
