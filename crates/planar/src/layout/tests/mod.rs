mod anchor;
mod split;
