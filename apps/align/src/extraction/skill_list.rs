//! Built-in technical skill vocabulary. Entries are normalized at load time
//! (lowercased, tokenized, singularized, joined by single spaces), so only one
//! inflection of each term is listed.

pub const DEFAULT_SKILLS: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "typescript", "golang", "rust", "c++", "c#", "c/c++",
    "ruby", "php", "swift", "kotlin", "scala", "perl", "haskell", "erlang", "elixir", "clojure",
    "f#", "dart", "lua", "groovy", "objective-c", "matlab", "julia", "fortran", "cobol",
    "sql", "nosql", "bash", "shell scripting", "powershell", "html", "html5", "css", "css3",
    "sass", "graphql", "solidity", "webassembly", "vba", "assembly",
    // Frontend
    "react", "react.js", "reactjs", "react native", "angular", "angularjs", "vue", "vue.js",
    "vuejs", "svelte", "next.js", "nuxt.js", "gatsby", "redux", "jquery", "tailwind css",
    "bootstrap", "material ui", "webpack", "vite", "babel", "storybook", "d3.js", "three.js",
    "flutter", "swiftui", "jetpack compose", "xamarin", "ionic", "electron",
    // Backend and frameworks
    "node.js", "nodejs", "express.js", "nestjs", "django", "flask", "fastapi",
    "spring", "spring boot", "hibernate", "ruby on rails", "rails", "laravel", "symfony",
    ".net", ".net core", "asp.net", "entity framework", "gin", "actix", "axum", "tokio",
    "grpc", "rest api", "restful", "restful api", "soap", "websocket",
    "microservice", "serverless", "oauth", "jwt", "openapi", "swagger",
    // Data stores
    "postgresql", "postgres", "mysql", "mariadb", "sqlite", "oracle", "sql server",
    "mongodb", "redis", "cassandra", "dynamodb", "couchbase", "neo4j", "elasticsearch",
    "opensearch", "snowflake", "bigquery", "redshift", "clickhouse", "cockroachdb",
    "firebase", "supabase", "memcached", "influxdb", "timescaledb",
    // Cloud and infrastructure
    "aws", "amazon web services", "azure", "gcp", "google cloud", "google cloud platform",
    "ec2", "s3", "lambda", "aws lambda", "cloudformation", "cloudfront", "ecs", "eks",
    "docker", "kubernetes", "k8s", "helm", "terraform", "ansible", "puppet", "chef",
    "pulumi", "vagrant", "openshift", "istio", "nginx", "apache", "linux", "unix", "windows server",
    "heroku", "vercel", "netlify", "digitalocean", "cloudflare",
    // DevOps and tooling
    "ci/cd", "continuous integration", "continuous delivery", "jenkins", "github actions",
    "gitlab ci", "circleci", "travis ci", "argo cd", "git", "github", "gitlab", "bitbucket",
    "jira", "confluence", "devops", "mlops", "sre", "site reliability engineering",
    "prometheus", "grafana", "datadog", "splunk", "new relic", "elk stack", "kibana",
    "logstash", "opentelemetry", "sentry", "pagerduty",
    // Messaging and streaming
    "kafka", "apache kafka", "rabbitmq", "activemq", "amazon sqs", "sqs", "sns", "kinesis",
    "pub/sub", "nats", "zeromq", "apache spark", "spark", "hadoop", "hive", "flink",
    "apache flink", "airflow", "apache airflow", "dbt", "databricks", "etl", "elt",
    "data pipeline", "data warehouse", "data lake", "data modeling", "data engineering",
    // Data science and ML
    "machine learning", "deep learning", "artificial intelligence", "ai", "ml",
    "natural language processing", "nlp", "computer vision", "reinforcement learning",
    "neural networks", "large language models", "llm", "generative ai",
    "prompt engineering", "rag", "tensorflow", "pytorch", "keras", "scikit-learn",
    "sklearn", "pandas", "numpy", "scipy", "matplotlib", "seaborn", "jupyter", "xgboost",
    "lightgbm", "hugging face", "transformers", "langchain", "opencv", "spacy", "nltk",
    "statistics", "data analysis", "data science", "data visualization", "a/b testing",
    "tableau", "power bi", "looker", "excel", "r programming", "sas", "spss",
    // Practices and concepts
    "agile", "scrum", "kanban", "tdd", "test-driven development", "bdd", "unit testing",
    "integration testing", "automated testing", "test automation", "selenium", "cypress",
    "playwright", "jest", "mocha", "pytest", "junit", "object-oriented programming", "oop",
    "functional programming", "design patterns", "system design", "distributed systems",
    "concurrency", "multithreading", "algorithms", "data structures", "api design",
    "performance tuning", "caching", "load balancing", "event-driven architecture",
    "domain-driven design", "software architecture", "cloud computing", "cloud architecture",
    "infrastructure as code", "containerization", "orchestration", "observability",
    "monitoring", "version control", "code review", "debugging",
    // Security and networking
    "cybersecurity", "penetration testing", "owasp", "encryption", "ssl",
    "tls", "tcp/ip", "http", "dns", "vpn", "iam", "sso", "saml", "openid connect",
    "zero trust", "siem", "soc 2", "gdpr", "hipaa",
    // Mobile and platforms
    "ios", "android", "mobile development", "embedded systems", "rtos", "fpga", "verilog",
    "vhdl", "arduino", "raspberry pi", "iot", "blockchain", "ethereum", "web3",
    // Product, design and business tools
    "figma", "adobe xd", "photoshop", "illustrator", "ux design", "ui design",
    "user research", "salesforce", "sap", "servicenow", "hubspot", "google analytics",
    "seo", "sem", "crm", "erp", "product management", "project management",
    "stakeholder management", "technical writing", "pmp", "itil", "six sigma",
    // Web fundamentals and misc
    "web development", "frontend development", "backend development", "full stack",
    "full-stack", "responsive design", "accessibility", "wcag", "web performance",
    "progressive web apps", "pwa", "json", "xml", "yaml", "protobuf", "regex",
    "vim", "vscode", "intellij", "postman", "npm", "yarn", "pnpm", "maven", "gradle",
    "cmake", "llvm", "wasm",
];
