//! Static catalog of tools advertised to the completion provider.
//!
//! The model is prompted against these exact names, parameter shapes, enums,
//! and defaults; they form a semi-stable contract with the provider and must
//! not drift casually. Handlers live in [`crate::dispatch`].

use std::sync::OnceLock;

use serde_json::{json, Value};

/// The full tool catalog, in the order it is advertised.
pub fn tool_catalog() -> &'static [Value] {
    static CATALOG: OnceLock<Vec<Value>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// Names of every catalogued tool, in catalog order.
pub fn tool_names() -> Vec<&'static str> {
    tool_catalog()
        .iter()
        .filter_map(|t| t["function"]["name"].as_str())
        .collect()
}

fn build_catalog() -> Vec<Value> {
    vec![
        json!({
            "type": "function",
            "function": {
                "name": "get_user_tasks",
                "description": "Retrieve all tasks for the current user including pending, completed, and overdue items",
                "parameters": {
                    "type": "object",
                    "properties": {},
                    "required": []
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "get_user_module_progress",
                "description": "Get the user's module progress and last opened timestamps",
                "parameters": {
                    "type": "object",
                    "properties": {},
                    "required": []
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "get_recommended_modules",
                "description": "Return top recommended learning modules for the user based on role and incomplete progress",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "limit": { "type": "number", "description": "Max number of recommendations", "default": 3 }
                    },
                    "required": []
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "complete_task",
                "description": "Mark a task as completed and award XP to the user",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "taskId": {
                            "type": "string",
                            "description": "The unique identifier of the task to complete"
                        }
                    },
                    "required": ["taskId"]
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "get_user_profile",
                "description": "Get user profile information including role, department, level, and XP",
                "parameters": {
                    "type": "object",
                    "properties": {},
                    "required": []
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "create_learning_plan",
                "description": "Create a personalized learning plan based on user's role and current skill gaps",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "focus_area": {
                            "type": "string",
                            "description": "The main area to focus learning on (e.g., 'technical', 'leadership', 'domain-specific')"
                        },
                        "timeframe": {
                            "type": "string",
                            "description": "Timeline for the learning plan (e.g., '1 month', '3 months', '6 months')"
                        }
                    },
                    "required": ["focus_area"]
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "analyze_performance_trends",
                "description": "Analyze user's performance patterns over time to identify trends, bottlenecks, and improvement opportunities",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "time_period": {
                            "type": "string",
                            "description": "Time period to analyze (e.g., '30 days', '90 days', '6 months')",
                            "default": "30 days"
                        }
                    }
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "get_skill_gap_analysis",
                "description": "Compare user's current skills with role requirements and industry standards",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "target_role": {
                            "type": "string",
                            "description": "Role to compare against (e.g., 'Senior Engineer', 'Product Manager')"
                        }
                    }
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "create_action_plan",
                "description": "Generate a specific, time-bound action plan with concrete steps and deadlines",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "goal": {
                            "type": "string",
                            "description": "The specific goal to create a plan for"
                        },
                        "timeframe": {
                            "type": "string",
                            "description": "Deadline for achieving the goal"
                        },
                        "priority_level": {
                            "type": "string",
                            "enum": ["high", "medium", "low"],
                            "description": "Priority level for this goal"
                        }
                    },
                    "required": ["goal"]
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "get_peer_benchmarks",
                "description": "Compare user's performance against peers in similar roles/departments",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "comparison_type": {
                            "type": "string",
                            "enum": ["department", "role", "level", "company"],
                            "description": "Type of peer comparison to perform"
                        }
                    }
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "predict_career_outcomes",
                "description": "Use current trajectory to predict likely career outcomes and suggest optimizations",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "projection_years": {
                            "type": "number",
                            "description": "Number of years to project into the future",
                            "default": 2
                        }
                    }
                }
            }
        }),
    ]
}
