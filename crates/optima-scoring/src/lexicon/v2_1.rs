//! Lexicon revision 2.1.
//!
//! Entries are listed once each; multi-word entries are matched as phrases.

/// Higher-order action verbs and verb phrases.
pub const COGNITIVE_VERBS: [&str; 87] = [
    // Analyze / Understand / Apply
    "analyze", "analyze why", "analyze how", "break down", "diagnose", "classify", "categorize",
    "organize", "structure", "outline", "summarize", "synthesize", "explain", "explain why",
    "explain how", "illustrate", "demonstrate", "show that", "derive", "compute", "calculate",
    "solve", "determine", "evaluate", "estimate", "approximate", "simplify", "expand", "factor",
    "generalize", "specialize", "transform", "translate", "apply", "use", "implement",
    "simulate", "model", "design", "plan",
    // Compare / Critique / Argue
    "compare", "contrast", "differentiate", "distinguish", "relate", "map", "align", "justify",
    "defend", "argue", "debate", "critique", "assess", "appraise", "review", "validate",
    "verify", "check", "confirm", "prove", "disprove", "falsify", "refute", "predict",
    "hypothesize", "conjecture", "infer", "deduce", "induce",
    // Strategy & meta-actions
    "choose", "select", "prioritize", "optimize", "trade off", "reason", "reason about",
    "formulate", "reformulate", "compose", "decompose", "reconstruct", "reframe", "propose",
    "suggest", "identify", "pinpoint", "provide",
];

/// Mathematical and reasoning vocabulary, grouped by CCSS strand.
pub const ABSTRACT_TERMS: [&str; 210] = [
    // General math/abstract
    "abstraction", "structure", "pattern", "rule", "property", "invariant", "constraint",
    "variable", "parameter", "constant", "function", "mapping", "relation", "set", "subset",
    "domain", "range", "input", "output", "model", "system", "theoretical", "assumption",
    "axiom",
    // Arithmetic/number
    "integer", "whole number", "natural number", "rational", "irrational", "real number",
    "prime", "composite", "factor", "multiple", "divisor", "gcd", "lcm", "remainder", "ratio",
    "unit rate", "rate", "proportion", "proportionality", "percentage", "percent", "fraction",
    "numerator", "denominator", "decimal", "place value",
    // Expressions & equations (EE)
    "term", "expression", "equation", "identity", "inequality", "formula", "coefficient",
    "variable term", "constant term", "like terms", "distribution", "distributive property",
    "commutative property", "associative property", "linear", "nonlinear", "quadratic",
    "polynomial", "exponent", "power", "base", "evaluate expression", "substitution",
    "solution set", "equivalent", "system of equations", "elimination", "substitution method",
    "graphical solution", "factorization",
    // Geometry (G)
    "point", "line", "ray", "segment", "angle", "right angle", "acute angle", "obtuse angle",
    "parallel", "perpendicular", "intersect", "triangle", "isosceles", "scalene", "equilateral",
    "quadrilateral", "rectangle", "square", "rhombus", "parallelogram", "trapezoid", "polygon",
    "circle", "arc", "chord", "tangent", "secant", "radius", "diameter", "circumference",
    "area", "perimeter", "surface area", "volume", "prism", "pyramid", "cylinder", "cone",
    "sphere", "similarity", "congruence", "scale factor", "dilation", "rotation", "reflection",
    "translation",
    // Ratios & Proportional Relationships (RP)
    "unit price", "constant of proportionality", "direct variation",
    "proportional relationship", "table of values", "double number line",
    // Coordinate / functions
    "coordinate plane", "axis", "x-axis", "y-axis", "origin", "ordered pair", "slope",
    "intercept", "slope-intercept form", "graph", "curve", "table", "sequence",
    "arithmetic sequence", "geometric sequence", "nth term", "recurrence",
    // Statistics & Probability (SP)
    "data set", "sample", "population", "bias", "random", "experiment", "trial", "event",
    "outcome", "likelihood", "odds", "probability", "theoretical probability",
    "experimental probability", "independent events", "dependent events",
    "conditional probability", "relative frequency", "mean", "median", "mode", "quartile",
    "interquartile range", "percentile", "variance", "standard deviation", "box plot",
    "histogram", "dot plot", "bar chart", "scatter plot", "correlation", "trend line",
    "regression", "residual",
    // Reasoning & new terms from analysis
    "equivalence", "implication", "contradiction", "counterexample", "generalization",
    "edge case", "efficiency", "strategy", "tradeoff", "optimal", "feasible",
    "constraint satisfaction", "reasoning", "approach", "method", "solution", "scenario",
    "concept", "principle", "applicability", "validity", "strengths", "weaknesses", "errors",
    "misunderstanding", "improvement",
];

/// Requests to justify, reflect on, or check reasoning.
pub const METACOGNITIVE_VERBS: [&str; 23] = [
    "justify", "explain", "compare", "evaluate", "critique", "argue", "reflect", "assess",
    "self-check", "check your work", "verify reasoning", "validate reasoning",
    "explain reasoning", "explain decision", "explain choice", "explain steps", "review",
    "revise", "debug", "analyze error", "error analysis", "sanity check", "self-assess",
];

/// Conditional, causal and contrastive connectors.
pub const LOGIC_CONNECTORS: [&str; 57] = [
    "if", "then", "if and only if", "iff", "therefore", "hence", "thus", "so", "because",
    "since", "as a result", "consequently", "accordingly", "it follows that", "implies",
    "this implies", "we conclude", "we can conclude", "by contradiction", "by induction",
    "suppose", "assume", "given", "given that", "provided that", "unless", "otherwise",
    "in that case", "consider", "let", "let x be", "let n be", "for any", "for all",
    "there exists", "either", "or", "neither", "nor", "both", "case", "case 1", "case 2",
    "case analysis", "approximately", "about", "roughly", "at least", "at most", "no more than",
    "no less than", "however", "nevertheless", "nonetheless", "on the other hand",
    "in contrast", "meanwhile",
];

/// Modal verbs and hedges.
pub const MODALS: [&str; 23] = [
    "can", "cannot", "can not", "could", "could not", "might", "may", "must", "must not",
    "should", "should not", "would", "would not", "will", "will not", "shall", "ought to",
    "likely", "unlikely", "possibly", "probably", "certainly", "surely",
];

/// Function words excluded from lexical density.
pub const STOPWORDS: [&str; 172] = [
    "a", "an", "the", "and", "but", "or", "nor", "so", "for", "yet", "about", "above", "after",
    "again", "against", "all", "am", "any", "are", "aren't", "as", "at", "be", "because",
    "been", "before", "being", "below", "between", "both", "by", "could", "couldn't", "did",
    "didn't", "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "few",
    "from", "further", "had", "hadn't", "has", "hasn't", "have", "haven't", "having", "he",
    "he'd", "he'll", "he's", "her", "here", "here's", "hers", "herself", "him", "himself",
    "his", "how", "how's", "i", "i'd", "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't",
    "it", "it's", "its", "itself", "let's", "me", "more", "most", "mustn't", "my", "myself",
    "no", "not", "of", "off", "on", "once", "only", "other", "ought", "our", "ours",
    "ourselves", "out", "over", "own", "same", "she", "she'd", "she'll", "she's", "should",
    "shouldn't", "some", "such", "than", "that", "that's", "their", "theirs", "them",
    "themselves", "then", "there", "there's", "these", "they", "they'd", "they'll", "they're",
    "they've", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was",
    "wasn't", "we", "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's",
    "when", "when's", "where", "where's", "which", "while", "who", "who's", "whom", "why",
    "why's", "with", "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've",
    "your", "yours", "yourself", "yourselves",
];
