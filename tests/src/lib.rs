mod cloning;
mod rendering;
