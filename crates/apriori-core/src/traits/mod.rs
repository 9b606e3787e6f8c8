mod lemmatizer;
mod lexical_resource;

pub use lemmatizer::ILemmatizer;
pub use lexical_resource::ILexicalResource;
