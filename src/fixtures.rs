//! Trimmed copies of real result pages.

pub const EMPTY: &str = r#"<!DOCTYPE html>
<html><head><title>有道词典</title></head>
<body><div id="searchLayout"><section class="modules">
  </section></div></body></html>"#;

pub const MAYBE: &str = r#"<!DOCTYPE html>
<html><body><section class="modules">
<div class="maybe">
  <p class="title">您要找的是不是：</p>
  <div class="maybe_word"><a class="point">hello</a><p class="maybe_trans">int. 喂；你好</p></div>
  <div class="maybe_word"><a class="point">hallo</a><p class="maybe_trans"></p></div>
  <div class="maybe_word"><a class="point">hullo</a><p class="maybe_trans">int. 喂</p></div>
</div>
</section></body></html>"#;

pub const FORWARD: &str = r#"<!DOCTYPE html>
<html><body><section class="modules">
<div class="word-head"><div class="title">hello<div class="suffix">添加至单词本</div></div></div>
<div class="phone_con">
  <div class="per-phone"><span>英 </span><span class="phonetic">/həˈləʊ/</span></div>
  <div class="per-phone"><span>美 </span><span class="phonetic">/həˈloʊ/</span></div>
</div>
<div class="trans-container">
  <ul class="basic">
    <li class="word-exp"><span class="pos">int.</span><span class="trans">喂，你好</span></li>
    <li class="word-exp"><span class="pos">n.</span><span class="trans">招呼，问候</span></li>
  </ul>
</div>
<div class="webPhrase"><ul>
  <li class="mcols-layout"><a class="point">hello world</a><p class="sen-phrase">你好世界</p></li>
  <li class="mcols-layout"><a class="point">Hello Kitty</a><p class="sen-phrase">凯蒂猫</p></li>
</ul></div>
<div class="blng_sents_part"><ul>
  <li class="mcols-layout"><div class="col2"><p class="sen-eng">Hello, Tom.</p><p class="sen-ch">你好，汤姆。</p><p class="secondary">《柯林斯英汉双解大词典》</p></div></li>
</ul></div>
</section></body></html>"#;

pub const FORWARD_PLAIN: &str = r#"<!DOCTYPE html>
<html><body><section class="modules">
<div class="word-head"><div class="title">hello</div></div>
<div class="trans-container"><ul class="basic"><li>n.苹果</li><li>苹果树</li></ul></div>
</section></body></html>"#;

pub const REVERSE: &str = r#"<!DOCTYPE html>
<html><body><section class="modules">
<div class="word-head"><div class="title">你好</div></div>
<div class="trans-container"><p class="pronounce">nǐ hǎo</p></div>
<div class="trans-container"><p>hello; hi</p><p>how do you do</p></div>
</section></body></html>"#;

pub const REVERSE_PINYIN: &str = r#"<!DOCTYPE html>
<html><body><section class="modules">
<div class="word-head"><div class="title">你好</div></div>
<div class="phone_con"><span class="phonetic">nǐ hǎo</span></div>
<div class="trans-container"><p class="pronounce">nǐ hǎo</p></div>
<div class="trans-container"><p>hello; hi</p><p>how do you do</p></div>
</section></body></html>"#;
