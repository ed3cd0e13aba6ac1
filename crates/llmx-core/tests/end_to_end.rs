use llmx_core::{tokenize, TokenizeMethod};

#[test]
fn pricing_sentence_in_subword_mode() {
    let input = "I don't like ChatGPT's unbelievable pricing.";
    let toks = tokenize(input, TokenizeMethod::Subword);
    let texts: Vec<&str> = toks.iter().map(|t| t.text.as_str()).collect();

    assert_eq!(texts,
               vec!["I", " ", "don", "'", "t", " ", "like", " ", "Chat", "GPT", "'", "s", " ", "un", "believ", "able",
                    " ", "pric", "ing", "."]);

    let don = texts.iter().position(|t| *t == "don").unwrap();
    assert_eq!(texts[don + 1], "'");
    assert_eq!(texts[don + 2], "t");

    // ChatGPT se reparte en más de un token
    let chat = texts.iter().position(|t| *t == "Chat").unwrap();
    assert_eq!(texts[chat + 1], "GPT");

    let un = texts.iter().position(|t| *t == "un").unwrap();
    assert_eq!(&texts[un..un + 3], &["un", "believ", "able"]);

    let naive = input.split_whitespace().count();
    assert!(toks.len() > naive);
    assert!(toks.iter().enumerate().all(|(i, t)| t.id == i));
}

#[test]
fn methods_order_by_granularity() {
    let input = "Tokenization turns unbelievable text into pieces.";
    let word = tokenize(input, TokenizeMethod::Word).len();
    let char_count = tokenize(input, TokenizeMethod::Character).len();
    let words_only = tokenize(input, TokenizeMethod::Subword).iter().filter(|t| !t.is_whitespace()).count();
    assert!(word < words_only);
    assert!(words_only < char_count);
}
