use super::case::capitalize;

pub fn snake(text: &str) -> String {
    text.replace(' ', "_").to_lowercase()
}

pub fn screaming_snake(text: &str) -> String {
    text.replace(' ', "_").to_uppercase()
}

pub fn camel(text: &str) -> String {
    text.split(' ')
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

pub fn pascal(text: &str) -> String {
    text.split(' ').map(capitalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case() {
        assert_eq!(snake("Hello World"), "hello_world");
        assert_eq!(snake("a  b"), "a__b");
    }

    #[test]
    fn screaming_snake_case() {
        assert_eq!(screaming_snake("Hello World"), "HELLO_WORLD");
    }

    #[test]
    fn camel_case() {
        assert_eq!(camel("Hello big WORLD"), "helloBigWorld");
        assert_eq!(camel("single"), "single");
        assert_eq!(camel(""), "");
    }

    #[test]
    fn pascal_case() {
        assert_eq!(pascal("hello big WORLD"), "HelloBigWorld");
        assert_eq!(pascal("test"), "Test");
    }

    #[test]
    fn empty_words_vanish_when_concatenated() {
        assert_eq!(pascal("a  b"), "AB");
        assert_eq!(camel(" lead"), "Lead");
    }
}
