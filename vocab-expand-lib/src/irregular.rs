// Irregular verb forms. The table is fixed at compile time; lookups go through
// a lazily built index keyed by the lowercase base form.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::types::VerbForms;

const fn verb(
    base: &'static str,
    past: &'static str,
    past_participle: &'static str,
    present_participle: &'static str,
) -> (&'static str, VerbForms) {
    (
        base,
        VerbForms {
            past,
            past_participle,
            present_participle,
        },
    )
}

/// Base form → (past, past participle, present participle).
pub static IRREGULAR_VERBS: &[(&str, VerbForms)] = &[
    verb("be", "was", "been", "being"),
    verb("bear", "bore", "borne", "bearing"),
    verb("beat", "beat", "beaten", "beating"),
    verb("become", "became", "become", "becoming"),
    verb("begin", "began", "begun", "beginning"),
    verb("bet", "bet", "bet", "betting"),
    verb("bite", "bit", "bitten", "biting"),
    verb("blow", "blew", "blown", "blowing"),
    verb("break", "broke", "broken", "breaking"),
    verb("bring", "brought", "brought", "bringing"),
    verb("build", "built", "built", "building"),
    verb("buy", "bought", "bought", "buying"),
    verb("catch", "caught", "caught", "catching"),
    verb("choose", "chose", "chosen", "choosing"),
    verb("come", "came", "come", "coming"),
    verb("cut", "cut", "cut", "cutting"),
    verb("dig", "dug", "dug", "digging"),
    verb("do", "did", "done", "doing"),
    verb("draw", "drew", "drawn", "drawing"),
    verb("drink", "drank", "drunk", "drinking"),
    verb("drive", "drove", "driven", "driving"),
    verb("eat", "ate", "eaten", "eating"),
    verb("fall", "fell", "fallen", "falling"),
    verb("feed", "fed", "fed", "feeding"),
    verb("feel", "felt", "felt", "feeling"),
    verb("fight", "fought", "fought", "fighting"),
    verb("find", "found", "found", "finding"),
    verb("fly", "flew", "flown", "flying"),
    verb("forget", "forgot", "forgotten", "forgetting"),
    verb("get", "got", "gotten", "getting"),
    verb("give", "gave", "given", "giving"),
    verb("go", "went", "gone", "going"),
    verb("grow", "grew", "grown", "growing"),
    verb("hang", "hung", "hung", "hanging"),
    verb("have", "had", "had", "having"),
    verb("hear", "heard", "heard", "hearing"),
    verb("hide", "hid", "hidden", "hiding"),
    verb("hit", "hit", "hit", "hitting"),
    verb("hold", "held", "held", "holding"),
    verb("hurt", "hurt", "hurt", "hurting"),
    verb("keep", "kept", "kept", "keeping"),
    verb("know", "knew", "known", "knowing"),
    verb("lay", "laid", "laid", "laying"),
    verb("lead", "led", "led", "leading"),
    verb("leave", "left", "left", "leaving"),
    verb("lend", "lent", "lent", "lending"),
    verb("let", "let", "let", "letting"),
    verb("lie", "lay", "lain", "lying"),
    verb("lose", "lost", "lost", "losing"),
    verb("make", "made", "made", "making"),
    verb("mean", "meant", "meant", "meaning"),
    verb("meet", "met", "met", "meeting"),
    verb("pay", "paid", "paid", "paying"),
    verb("put", "put", "put", "putting"),
    verb("read", "read", "read", "reading"),
    verb("ride", "rode", "ridden", "riding"),
    verb("ring", "rang", "rung", "ringing"),
    verb("rise", "rose", "risen", "rising"),
    verb("run", "ran", "run", "running"),
    verb("say", "said", "said", "saying"),
    verb("see", "saw", "seen", "seeing"),
    verb("sell", "sold", "sold", "selling"),
    verb("send", "sent", "sent", "sending"),
    verb("set", "set", "set", "setting"),
    verb("shake", "shook", "shaken", "shaking"),
    verb("shine", "shone", "shone", "shining"),
    verb("shoot", "shot", "shot", "shooting"),
    verb("show", "showed", "shown", "showing"),
    verb("shut", "shut", "shut", "shutting"),
    verb("sing", "sang", "sung", "singing"),
    verb("sit", "sat", "sat", "sitting"),
    verb("sleep", "slept", "slept", "sleeping"),
    verb("speak", "spoke", "spoken", "speaking"),
    verb("spend", "spent", "spent", "spending"),
    verb("stand", "stood", "stood", "standing"),
    verb("steal", "stole", "stolen", "stealing"),
    verb("stick", "stuck", "stuck", "sticking"),
    verb("swim", "swam", "swum", "swimming"),
    verb("take", "took", "taken", "taking"),
    verb("teach", "taught", "taught", "teaching"),
    verb("tear", "tore", "torn", "tearing"),
    verb("tell", "told", "told", "telling"),
    verb("think", "thought", "thought", "thinking"),
    verb("throw", "threw", "thrown", "throwing"),
    verb("understand", "understood", "understood", "understanding"),
    verb("wake", "woke", "woken", "waking"),
    verb("wear", "wore", "worn", "wearing"),
    verb("win", "won", "won", "winning"),
    verb("write", "wrote", "written", "writing"),
];

static INDEX: LazyLock<HashMap<&'static str, &'static VerbForms>> =
    LazyLock::new(|| IRREGULAR_VERBS.iter().map(|(base, forms)| (*base, forms)).collect());

/// Look up the stored forms of an irregular verb. Case-insensitive.
pub fn lookup(verb: &str) -> Option<&'static VerbForms> {
    INDEX.get(verb.trim().to_lowercase().as_str()).copied()
}
